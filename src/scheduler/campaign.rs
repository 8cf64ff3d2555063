use std::sync::Arc;

use chrono::Utc;
use serenity::http::Http;
use tokio_cron_scheduler::Job;

use crate::{
    error::AppError, service::campaign_resolution::CampaignResolutionService, state::Data,
};

/// Job that tallies running campaigns, every minute.
///
/// Catches campaigns that expired without a new vote and those whose vote
/// message was deleted.
pub fn job(data: Data, http: Arc<Http>) -> Result<Job, AppError> {
    let job = Job::new_async("30 * * * * *", move |_uuid, _lock| {
        let data = data.clone();
        let http = http.clone();

        Box::pin(async move {
            let service = CampaignResolutionService::new(&data.db, http, &data.config);

            match service.tally_all(Utc::now()).await {
                Ok(0) => {}
                Ok(resolved) => tracing::info!("Resolved {} campaigns", resolved),
                Err(e) => tracing::error!("Error tallying campaigns: {}", e),
            }
        })
    })?;

    Ok(job)
}
