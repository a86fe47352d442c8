use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::CommandContext,
    error::AppError,
    i18n::Text,
    model::guild_settings::{Language, MAX_PREFIX_LEN},
    service::guild_settings::GuildSettingsService,
};

pub fn language_options(command: CreateCommand) -> CreateCommand {
    let option = Language::ALL.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "language", "Language to reply in")
            .required(true),
        |option, lang| option.add_string_choice(lang.display_name(), lang.as_str()),
    );

    command.add_option(option)
}

pub fn prefix_options(command: CreateCommand) -> CreateCommand {
    command
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "prefix", "New prefix")
                .max_length(MAX_PREFIX_LEN as u16)
                .required(true),
        )
}

/// Stores the guild language and confirms in the new language.
pub async fn set_language(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(guild_id) = cx.guild_id() else {
        return cx.reply_text(Text::NoPrivileges).await;
    };

    let lang = cx
        .string_option("language")
        .and_then(|value| value.parse::<Language>().ok())
        .ok_or_else(|| AppError::BadRequest("Missing or unknown language".to_string()))?;

    let settings = GuildSettingsService::new(&cx.state.db)
        .set_language(guild_id, lang)
        .await?;
    tracing::info!("Guild {} switched language to {}", guild_id, settings.lang);

    cx.reply(settings.lang.text(Text::LanguageChanged)).await
}

pub async fn set_prefix(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(guild_id) = cx.guild_id() else {
        return cx.reply_text(Text::NoPrivileges).await;
    };

    let prefix = cx.string_option("prefix").unwrap_or_default();

    match GuildSettingsService::new(&cx.state.db)
        .set_prefix(guild_id, prefix)
        .await
    {
        Ok(settings) => {
            tracing::info!("Guild {} switched prefix to {}", guild_id, settings.prefix);
            cx.reply(format!("{}: `{}`", cx.lang().text(Text::PrefixChanged), settings.prefix))
                .await
        }
        Err(AppError::BadRequest(_)) => cx.reply_text(Text::InvalidPrefix).await,
        Err(e) => Err(e),
    }
}
