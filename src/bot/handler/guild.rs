//! Guild event handler.
//!
//! `guild_create` fires for every guild on startup and again when the bot is
//! added to a new one. Settings rows are created lazily here so the first
//! command in a guild already finds them.

use serenity::all::{ChannelId, Context, Guild};

use crate::{data::guild_settings::GuildSettingsRepository, state::BotState};

/// Handles the guild_create event.
///
/// Ensures a settings row exists. When `is_new` is set the bot was just
/// invited, and a notice goes to the support channel if one is configured.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for sending the join notice
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether the bot just joined this guild
pub async fn handle_guild_create(state: &BotState, ctx: Context, guild: Guild, is_new: Option<bool>) {
    let guild_id = guild.id.get();

    if let Err(e) = GuildSettingsRepository::new(&state.db)
        .get_or_create(guild_id)
        .await
    {
        tracing::error!("Failed to create settings for guild {}: {:?}", guild_id, e);
    }

    if is_new != Some(true) {
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild_id);

    let Some(channel_id) = state.support_channel_id else {
        return;
    };

    if let Err(e) = ChannelId::new(channel_id)
        .say(&ctx.http, join_notice(&guild))
        .await
    {
        tracing::error!("Failed to send join notice: {:?}", e);
    }
}

/// Message posted to the support channel when the bot joins a guild.
pub fn join_notice(guild: &Guild) -> String {
    format!(
        "Joined **{}** (`{}`), owned by <@{}>, with {} members.",
        guild.name, guild.id, guild.owner_id, guild.member_count
    )
}
