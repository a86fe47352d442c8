use std::sync::Arc;

use serenity::all::{ActivityData, ShardManager};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::presence::PresenceService, state::BotState};

/// Starts the presence scheduler
///
/// On every tick the bot's activity is set to the owner's stored choice, or to
/// the current top 1 demon when nothing is stored.
///
/// # Arguments
/// - `state`: Shared bot state
/// - `shard_manager`: Shard manager of the running client, used to reach every shard
/// - `cron`: Schedule in six field cron syntax
pub async fn start_scheduler(
    state: BotState,
    shard_manager: Arc<ShardManager>,
    cron: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = state.clone();
        let shard_manager = shard_manager.clone();

        Box::pin(async move {
            if let Err(e) = refresh_presence(&state, &shard_manager).await {
                tracing::error!("Error refreshing presence: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence scheduler started");

    Ok(())
}

async fn refresh_presence(state: &BotState, shard_manager: &ShardManager) -> Result<(), AppError> {
    let Some(name) = PresenceService::new(&state.db, &state.pointercrate)
        .current_activity()
        .await?
    else {
        return Ok(());
    };

    let runners = shard_manager.runners.lock().await;
    for runner in runners.values() {
        runner
            .runner_tx
            .set_activity(Some(ActivityData::playing(name.clone())));
    }

    tracing::debug!("Presence set to {} on {} shards", name, runners.len());

    Ok(())
}
