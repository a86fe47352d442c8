mod bot;
mod config;
mod data;
mod error;
mod i18n;
mod model;
mod pagination;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{bot::start, config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let state = BotState::new(&config, db, http_client)?;

    let client = start::init_bot(&config, state.clone()).await?;

    let shard_manager = client.shard_manager.clone();
    let presence_cron = config.presence_cron.clone();
    tokio::spawn(async move {
        if let Err(e) =
            scheduler::presence::start_scheduler(state, shard_manager, &presence_cron).await
        {
            tracing::error!("Presence scheduler error: {}", e);
        }
    });

    start::start_bot(client).await
}
