pub mod prelude;

pub mod bot_setting;
pub mod command_usage;
pub mod guild_settings;
