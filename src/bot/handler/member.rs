use chrono::Utc;
use serenity::all::{Context, GuildId, Member, RoleId, User};

use crate::{
    bot::handler::ready::update_status,
    model::role::RoleRegistry,
    service::role::RoleRegistryService,
    state::Data,
};

/// Handle a member joining a guild
///
/// Grants every auto-role and restores the Muted role for members still serving
/// a mute. A failure on one role does not stop the others.
pub async fn handle_guild_member_addition(data: &Data, ctx: Context, new_member: Member) {
    if new_member.guild_id.get() != data.config.guild {
        return;
    }

    update_status(data, &ctx);

    let Some(guild_roles) = ctx
        .cache
        .guild(new_member.guild_id)
        .map(|guild| guild.roles.clone())
    else {
        tracing::warn!("Guild {} not cached on member join", new_member.guild_id);
        return;
    };

    let auto_roles = match RoleRegistryService::new(&data.db, RoleRegistry::AutoRole)
        .list_existing(&guild_roles)
        .await
    {
        Ok(roles) => roles,
        Err(e) => {
            tracing::error!("Failed to get auto roles: {:?}", e);
            return;
        }
    };

    for role in &auto_roles {
        if let Err(e) = new_member.add_role(&ctx.http, role.id).await {
            tracing::error!(
                "Failed to grant auto role {} to {}: {:?}",
                role.name,
                new_member.user.id,
                e
            );
        }
    }

    if data
        .mutes
        .is_muted(new_member.user.id.get(), Utc::now())
        .await
    {
        let muted = RoleId::new(data.config.roles.muted);
        if let Err(e) = new_member.add_role(&ctx.http, muted).await {
            tracing::error!(
                "Failed to restore muted role for {}: {:?}",
                new_member.user.id,
                e
            );
        }
    }

    tracing::info!(
        "Member {} joined, granted {} auto roles",
        new_member.user.name,
        auto_roles.len()
    );
}

/// Handle a member leaving a guild
pub async fn handle_guild_member_removal(
    data: &Data,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if guild_id.get() != data.config.guild {
        return;
    }

    tracing::debug!("Member {} left", user.name);

    update_status(data, &ctx);
}
