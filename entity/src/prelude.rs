pub use super::bot_setting::Entity as BotSetting;
pub use super::command_usage::Entity as CommandUsage;
pub use super::guild_settings::Entity as GuildSettings;
