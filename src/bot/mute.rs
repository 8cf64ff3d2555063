//! Discord side of lifting a mute.

use std::sync::Arc;

use serenity::{
    all::{CreateMessage, GuildId, RoleId, UserId},
    http::Http,
};

use crate::{bot::embed::moderation::mute_expired, config::Config, error::AppError};

/// Removes the Muted role from a member if they still have it.
///
/// Members who left the guild are skipped.
///
/// # Returns
/// - `Ok(true)` - The role was removed
/// - `Ok(false)` - The member is gone or no longer had the role
pub async fn remove_muted_role(
    http: &Arc<Http>,
    config: &Config,
    user_id: u64,
) -> Result<bool, AppError> {
    let guild_id = GuildId::new(config.guild);
    let muted = RoleId::new(config.roles.muted);

    let member = match http.get_member(guild_id, UserId::new(user_id)).await {
        Ok(member) => member,
        Err(e) => {
            tracing::debug!("Muted member {} not found in guild: {}", user_id, e);
            return Ok(false);
        }
    };

    if !member.roles.contains(&muted) {
        return Ok(false);
    }

    http.remove_member_role(guild_id, member.user.id, muted, Some("Mute lifted"))
        .await?;

    Ok(true)
}

/// Tells a member their mute ended. Closed DMs are only logged.
pub async fn notify_mute_expired(http: &Arc<Http>, user_id: u64, guild_name: &str) {
    let dm = match UserId::new(user_id).create_dm_channel(http).await {
        Ok(dm) => dm,
        Err(e) => {
            tracing::debug!("Failed to open DM with {}: {}", user_id, e);
            return;
        }
    };

    if let Err(e) = dm
        .send_message(http, CreateMessage::new().embed(mute_expired(guild_name)))
        .await
    {
        tracing::debug!("Failed to DM mute expiry to {}: {}", user_id, e);
    }
}
