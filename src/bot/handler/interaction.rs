//! Slash command dispatch.
//!
//! Each command interaction is resolved to a [`BotCommand`], checked against its
//! access level, deferred, counted, and then run. Component presses are not
//! handled here; running sessions pick them up through their own collectors.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::{
    bot::{
        command::{BotCommand, CommandContext},
        permission,
    },
    data::command_usage::CommandUsageRepository,
    i18n::Text,
    model::guild_settings::GuildSettings,
    service::guild_settings::GuildSettingsService,
    state::BotState,
};

pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command {}", command.data.name);
        return;
    };

    let settings = match GuildSettingsService::new(&state.db)
        .for_interaction(command.guild_id.map(|id| id.get()))
        .await
    {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load guild settings: {:?}", e);
            GuildSettings::transient()
        }
    };

    let access = bot_command.access();
    if !permission::is_allowed(access, &ctx, &command, state) {
        deny(&ctx, &command, settings.lang.text(access.denial())).await;
        return;
    }

    if let Err(e) = command.defer(&ctx.http).await {
        tracing::error!("Failed to defer command {}: {:?}", bot_command.name(), e);
        return;
    }

    if let Err(e) = CommandUsageRepository::new(&state.db)
        .increment(bot_command.name())
        .await
    {
        tracing::error!("Failed to count usage of {}: {:?}", bot_command.name(), e);
    }

    let cx = CommandContext {
        ctx: &ctx,
        command: &command,
        state,
        settings,
    };

    if let Err(e) = bot_command.run(&cx).await {
        tracing::error!("Failed to run command {}: {:?}", bot_command.name(), e);

        if let Err(e) = cx.reply_text(Text::UnknownError).await {
            tracing::error!("Failed to report command failure: {:?}", e);
        }
    }
}

/// Rejects the command with an ephemeral message instead of a deferred reply.
async fn deny(ctx: &Context, command: &CommandInteraction, text: &str) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to send access denial: {:?}", e);
    }
}
