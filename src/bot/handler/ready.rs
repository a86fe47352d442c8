//! Ready event handler.
//!
//! Fires once per gateway connection. Registers the global slash commands and
//! sets the initial activity so the bot does not sit without a presence until
//! the first scheduled refresh.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::{bot::command::BotCommand, service::presence::PresenceService, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state, used to look up the activity
/// - `ctx` - Discord context for registering commands and setting activity
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = BotCommand::ALL.iter().map(BotCommand::register).collect();
    match Command::set_global_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }

    match PresenceService::new(&state.db, &state.pointercrate)
        .current_activity()
        .await
    {
        Ok(Some(name)) => ctx.set_activity(Some(ActivityData::playing(name))),
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to resolve initial activity: {:?}", e),
    }
}
