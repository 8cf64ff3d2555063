use std::sync::Arc;

use chrono::Utc;
use serenity::{
    all::{Cache, GuildId},
    http::Http,
};
use tokio_cron_scheduler::Job;

use crate::{
    bot::mute::{notify_mute_expired, remove_muted_role},
    error::AppError,
    service::moderation::ModerationService,
    state::Data,
};

/// Job that lifts ended mutes, every minute.
pub fn job(data: Data, http: Arc<Http>, cache: Arc<Cache>) -> Result<Job, AppError> {
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let data = data.clone();
        let http = http.clone();
        let cache = cache.clone();

        Box::pin(async move {
            if let Err(e) = lift_expired_mutes(&data, http, &cache).await {
                tracing::error!("Error lifting expired mutes: {}", e);
            }
        })
    })?;

    Ok(job)
}

/// Lifts every cached mute that ended, removing the role and notifying the member.
async fn lift_expired_mutes(data: &Data, http: Arc<Http>, cache: &Cache) -> Result<(), AppError> {
    let lifted = ModerationService::new(&data.db, &data.mutes)
        .expire(Utc::now())
        .await?;

    if lifted.is_empty() {
        return Ok(());
    }

    let guild_name = cache
        .guild(GuildId::new(data.config.guild))
        .map(|guild| guild.name.clone())
        .unwrap_or_else(|| "the server".to_string());

    for mute in &lifted {
        match remove_muted_role(&http, &data.config, mute.user_id).await {
            Ok(_) => notify_mute_expired(&http, mute.user_id, &guild_name).await,
            Err(e) => tracing::error!(
                "Failed to remove muted role from {}: {:?}",
                mute.user_id,
                e
            ),
        }
    }

    tracing::info!("Lifted {} expired mutes", lifted.len());

    Ok(())
}
