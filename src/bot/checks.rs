//! Permission checks shared by commands and component handlers.

use serenity::all::{Cache, Member};

use crate::{
    config::RoleConfig,
    error::{internal::InternalError, AppError},
    model::actor::Actor,
    state::Context,
};

/// Builds the actor for a guild member.
///
/// Interaction members carry their resolved permissions; for messages the
/// Administrator flag is computed from the cached guild.
pub fn actor_for(cache: &Cache, member: &Member, roles: &RoleConfig) -> Actor {
    let is_admin = member
        .permissions
        .map(|p| p.administrator())
        .or_else(|| {
            cache
                .guild(member.guild_id)
                .map(|guild| guild.member_permissions(member).administrator())
        })
        .unwrap_or(false);

    let role_ids: Vec<u64> = member.roles.iter().map(|r| r.get()).collect();

    Actor::from_roles(member.user.id.get(), &role_ids, is_admin, roles)
}

/// The invoking member as an [`Actor`].
pub async fn actor(ctx: Context<'_>) -> Result<Actor, AppError> {
    let member = ctx
        .author_member()
        .await
        .ok_or(InternalError::UnknownGuild(ctx.data().config.guild))?;

    Ok(actor_for(ctx.cache(), &member, &ctx.data().config.roles))
}

/// Command check: Staff role or administrator.
pub async fn is_staff(ctx: Context<'_>) -> Result<bool, AppError> {
    Ok(actor(ctx).await?.can_moderate())
}
