mod bot_setting;
mod command_usage;
mod guild_settings;
