//! Slash commands.
//!
//! [`BotCommand`] is the single list of commands the bot registers and dispatches.
//! Each command lives in its own module and receives a [`CommandContext`] once the
//! interaction has passed its access check and been deferred.

pub mod about;
pub mod countrystats;
pub mod demonlist;
pub mod hardest;
pub mod help;
pub mod level;
pub mod nationalities;
pub mod player;
pub mod ranking;
pub mod settings;
pub mod top;

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption,
};

use crate::{
    bot::permission::Access,
    error::AppError,
    i18n::Text,
    model::{
        guild_settings::{GuildSettings, Language},
        pointercrate::ListTier,
    },
    pagination::{InteractionTransport, PageView, PaginationController},
    state::BotState,
};

/// Everything a command needs while it runs.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub command: &'a CommandInteraction,
    pub state: &'a BotState,
    pub settings: GuildSettings,
}

impl<'a> CommandContext<'a> {
    pub fn lang(&self) -> Language {
        self.settings.lang
    }

    pub fn user_id(&self) -> u64 {
        self.command.user.id.get()
    }

    pub fn guild_id(&self) -> Option<u64> {
        self.command.guild_id.map(|id| id.get())
    }

    fn option(&self, name: &str) -> Option<&CommandDataOptionValue> {
        self.command
            .data
            .options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string_option(&self, name: &str) -> Option<&str> {
        match self.option(name)? {
            CommandDataOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn integer_option(&self, name: &str) -> Option<i64> {
        match self.option(name)? {
            CommandDataOptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Replaces the deferred reply with a plain message.
    pub async fn reply(&self, text: impl Into<String>) -> Result<(), AppError> {
        self.command
            .edit_response(&self.ctx.http, PageView::notice(text).to_edit_response())
            .await?;

        Ok(())
    }

    pub async fn reply_text(&self, key: Text) -> Result<(), AppError> {
        self.reply(self.lang().text(key)).await
    }

    /// Transport for a session on the deferred reply.
    pub fn transport(&self) -> InteractionTransport<'a> {
        InteractionTransport::new(self.ctx, self.command)
    }

    pub fn list_controller<'t>(
        &self,
        transport: &'t mut InteractionTransport<'a>,
    ) -> PaginationController<'t, InteractionTransport<'a>> {
        PaginationController::new(transport, self.user_id(), self.state.session_timeout, self.lang())
    }

    /// Controller for close-only messages, which stay up longer than lists.
    pub fn static_controller<'t>(
        &self,
        transport: &'t mut InteractionTransport<'a>,
    ) -> PaginationController<'t, InteractionTransport<'a>> {
        PaginationController::new(transport, self.user_id(), self.state.static_timeout, self.lang())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Ranking,
    Main,
    Extended,
    Legacy,
    Top,
    Level,
    Player,
    CountryStats,
    Nationalities,
    Help,
    About,
    SetLanguage,
    SetPrefix,
    Hardest,
}

impl BotCommand {
    pub const ALL: [BotCommand; 14] = [
        BotCommand::Ranking,
        BotCommand::Main,
        BotCommand::Extended,
        BotCommand::Legacy,
        BotCommand::Top,
        BotCommand::Level,
        BotCommand::Player,
        BotCommand::CountryStats,
        BotCommand::Nationalities,
        BotCommand::Help,
        BotCommand::About,
        BotCommand::SetLanguage,
        BotCommand::SetPrefix,
        BotCommand::Hardest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::Ranking => "ranking",
            BotCommand::Main => "main",
            BotCommand::Extended => "extended",
            BotCommand::Legacy => "legacy",
            BotCommand::Top => "top",
            BotCommand::Level => "level",
            BotCommand::Player => "player",
            BotCommand::CountryStats => "countrystats",
            BotCommand::Nationalities => "nationalities",
            BotCommand::Help => "help",
            BotCommand::About => "about",
            BotCommand::SetLanguage => "set-language",
            BotCommand::SetPrefix => "set-prefix",
            BotCommand::Hardest => "hardest",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn access(&self) -> Access {
        match self {
            BotCommand::SetLanguage | BotCommand::SetPrefix => Access::GuildAdmin,
            BotCommand::Hardest => Access::Superuser,
            _ => Access::Everyone,
        }
    }

    /// Short description, shown in the command picker and in help.
    pub fn description(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (BotCommand::Ranking, Language::English) => "International player ranking",
            (BotCommand::Ranking, Language::Spanish) => "Ranking internacional de jugadores",
            (BotCommand::Main, Language::English) => "Demons in positions 1 to 75",
            (BotCommand::Main, Language::Spanish) => "Demons en las posiciones 1 a 75",
            (BotCommand::Extended, Language::English) => "Demons in positions 76 to 150",
            (BotCommand::Extended, Language::Spanish) => "Demons en las posiciones 76 a 150",
            (BotCommand::Legacy, Language::English) => "Demons that left the extended list",
            (BotCommand::Legacy, Language::Spanish) => "Demons que salieron de la lista extendida",
            (BotCommand::Top, Language::English) => "The hardest demon on the list",
            (BotCommand::Top, Language::Spanish) => "El demon más difícil de la lista",
            (BotCommand::Level, Language::English) => "Look up a demon by position or name",
            (BotCommand::Level, Language::Spanish) => "Busca un demon por posición o nombre",
            (BotCommand::Player, Language::English) => "Look up a player's records",
            (BotCommand::Player, Language::Spanish) => "Busca los récords de un jugador",
            (BotCommand::CountryStats, Language::English) => "Player leaderboard of a country",
            (BotCommand::CountryStats, Language::Spanish) => "Clasificación de jugadores de un país",
            (BotCommand::Nationalities, Language::English) => "Countries ranked by score",
            (BotCommand::Nationalities, Language::Spanish) => "Países ordenados por puntuación",
            (BotCommand::Help, Language::English) => "What each command does",
            (BotCommand::Help, Language::Spanish) => "Qué hace cada comando",
            (BotCommand::About, Language::English) => "About this bot",
            (BotCommand::About, Language::Spanish) => "Acerca de este bot",
            (BotCommand::SetLanguage, Language::English) => "[Admin] Change the bot language",
            (BotCommand::SetLanguage, Language::Spanish) => "[Admin] Cambia el idioma del bot",
            (BotCommand::SetPrefix, Language::English) => "[Admin] Change the text command prefix",
            (BotCommand::SetPrefix, Language::Spanish) => "[Admin] Cambia el prefijo de comandos",
            (BotCommand::Hardest, Language::English) => "[Superuser] Set the bot activity",
            (BotCommand::Hardest, Language::Spanish) => "[Superuser] Cambia la actividad del bot",
        }
    }

    /// Global command definition sent to Discord on startup.
    pub fn register(&self) -> CreateCommand {
        let command = CreateCommand::new(self.name()).description(self.description(Language::English));

        match self {
            BotCommand::Ranking => command.add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "page",
                    "Page to start on",
                )
                .min_int_value(1)
                .max_int_value(ranking::MAX_START_PAGE.into())
                .required(false),
            ),
            BotCommand::Level => level::options(command),
            BotCommand::Player => command.add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "Name or part of the name of the player",
                )
                .required(true),
            ),
            BotCommand::SetLanguage => settings::language_options(command),
            BotCommand::SetPrefix => settings::prefix_options(command),
            BotCommand::Hardest => command.add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "Activity to show",
                )
                .required(true),
            ),
            _ => command,
        }
    }

    pub async fn run(&self, cx: &CommandContext<'_>) -> Result<(), AppError> {
        match self {
            BotCommand::Ranking => ranking::run(cx).await,
            BotCommand::Main => demonlist::run(cx, ListTier::Main).await,
            BotCommand::Extended => demonlist::run(cx, ListTier::Extended).await,
            BotCommand::Legacy => demonlist::run(cx, ListTier::Legacy).await,
            BotCommand::Top => top::run(cx).await,
            BotCommand::Level => level::run(cx).await,
            BotCommand::Player => player::run(cx).await,
            BotCommand::CountryStats => countrystats::run(cx).await,
            BotCommand::Nationalities => nationalities::run(cx).await,
            BotCommand::Help => help::run(cx).await,
            BotCommand::About => about::run(cx).await,
            BotCommand::SetLanguage => settings::set_language(cx).await,
            BotCommand::SetPrefix => settings::set_prefix(cx).await,
            BotCommand::Hardest => hardest::run(cx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for command in BotCommand::ALL {
            assert_eq!(BotCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(BotCommand::from_name("unknown"), None);
    }

    #[test]
    fn privileged_commands_are_restricted() {
        assert_eq!(BotCommand::SetLanguage.access(), Access::GuildAdmin);
        assert_eq!(BotCommand::SetPrefix.access(), Access::GuildAdmin);
        assert_eq!(BotCommand::Hardest.access(), Access::Superuser);
        assert_eq!(BotCommand::Ranking.access(), Access::Everyone);
    }

    #[test]
    fn descriptions_fit_discord_limit() {
        for command in BotCommand::ALL {
            for lang in Language::ALL {
                let description = command.description(lang);
                assert!(!description.is_empty());
                assert!(description.chars().count() <= 100);
            }
        }
    }
}
