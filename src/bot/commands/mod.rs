//! Command definitions.
//!
//! Every command is a prefix command; those whose arguments can be expressed as
//! slash options are registered as slash commands too.

use std::collections::HashMap;

use poise::CreateReply;
use serenity::all::{CreateEmbed, Role, RoleId};

use crate::{
    error::{internal::InternalError, AppError},
    state::{Context, Data},
};

pub mod campaign;
pub mod community;
pub mod general;
pub mod moderation;
pub mod request;
pub mod role;
pub mod suggestion;
pub mod tag;

/// All commands handed to the framework.
pub fn all() -> Vec<poise::Command<Data, AppError>> {
    vec![
        general::ping(),
        community::hug(),
        community::eight_ball(),
        community::coinflip(),
        community::poll(),
        tag::tag(),
        role::ranks(),
        role::rank(),
        role::autoroles(),
        role::autorole(),
        campaign::campaign(),
        campaign::acceptcampaign(),
        campaign::cancelcampaign(),
        suggestion::suggest(),
        suggestion::suggestions(),
        request::request(),
        request::togglerequests(),
        moderation::warn(),
        moderation::kick(),
        moderation::ban(),
        moderation::mute(),
        moderation::unmute(),
        moderation::infractions(),
        moderation::delinfraction(),
    ]
}

/// Replies with a single embed.
pub(crate) async fn reply(ctx: Context<'_>, embed: CreateEmbed) -> Result<(), AppError> {
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// The configured guild's roles, from the cache.
pub(crate) fn guild_roles(ctx: Context<'_>) -> Result<HashMap<RoleId, Role>, AppError> {
    let guild_id = ctx.data().config.guild;

    Ok(ctx
        .cache()
        .guild(guild_id)
        .map(|guild| guild.roles.clone())
        .ok_or(InternalError::UnknownGuild(guild_id))?)
}
