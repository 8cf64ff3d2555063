use std::sync::Arc;

use serenity::{
    all::{Cache, GuildId},
    gateway::ShardManager,
};
use tokio_cron_scheduler::Job;

use crate::{bot::status, error::AppError, state::Data};

/// Job that refreshes the "Watching N programmers" activity, every five minutes.
pub fn job(data: Data, cache: Arc<Cache>, shards: Arc<ShardManager>) -> Result<Job, AppError> {
    let guild_id = GuildId::new(data.config.guild);

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let cache = cache.clone();
        let shards = shards.clone();

        Box::pin(async move {
            let count = status::programmer_count(&cache, guild_id);

            for runner in shards.runners.lock().await.values() {
                runner.runner_tx.set_activity(Some(status::activity(count)));
            }

            tracing::debug!("Status updated to {} programmers", count);
        })
    })?;

    Ok(job)
}
