mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::Data};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::load()?;

    let db = startup::connect_to_database(&config).await?;
    let mutes = startup::load_mute_cache(&db).await?;

    let data = Data::new(db, config, mutes);

    let mut client = bot::start::init_bot(data.clone()).await?;

    scheduler::start_schedulers(data, &client).await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
