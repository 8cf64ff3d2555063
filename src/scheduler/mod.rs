//! Recurring jobs.
//!
//! - [`mute_expiry`] lifts ended mutes every minute
//! - [`campaign`] tallies running campaigns every minute
//! - [`status`] refreshes the bot's activity every five minutes
//!
//! Each job clones the state it needs and logs its own errors so one failing job
//! never stops the others.

pub mod campaign;
pub mod mute_expiry;
pub mod status;

use serenity::all::Client;
use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, state::Data};

/// Registers and starts every job.
///
/// # Arguments
/// - `data` - Shared state
/// - `client` - Discord client whose HTTP client, cache and shards the jobs use
pub async fn start_schedulers(data: Data, client: &Client) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(mute_expiry::job(
            data.clone(),
            client.http.clone(),
            client.cache.clone(),
        )?)
        .await?;
    scheduler
        .add(campaign::job(data.clone(), client.http.clone())?)
        .await?;
    scheduler
        .add(status::job(
            data,
            client.cache.clone(),
            client.shard_manager.clone(),
        )?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Schedulers started");

    Ok(())
}
