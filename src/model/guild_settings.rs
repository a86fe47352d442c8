//! Domain models for per-guild settings.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::util::parse::parse_u64_from_string;

/// Default language for new guilds.
pub const DEFAULT_LANGUAGE: Language = Language::English;
/// Default text command prefix for new guilds.
pub const DEFAULT_PREFIX: &str = "!p";
/// Maximum length of a guild prefix, in characters.
pub const MAX_PREFIX_LEN: usize = 3;

/// Language the bot replies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Name stored in the database and used as the command choice value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    /// Human readable name, in the language itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" => Ok(Language::Spanish),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

/// Settings for a single Discord guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub id: i32,
    pub guild_id: u64,
    pub lang: Language,
    pub prefix: String,
}

impl GuildSettings {
    /// Settings used outside guilds (DMs), where nothing is persisted.
    pub fn transient() -> Self {
        Self {
            id: 0,
            guild_id: 0,
            lang: DEFAULT_LANGUAGE,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Converts an entity model to a settings domain model at the repository boundary.
    ///
    /// Unknown stored languages fall back to the default rather than failing the
    /// whole command.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The converted settings
    /// - `Err(DbErr)` - The stored guild id is not a valid snowflake
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, DbErr> {
        let guild_id = parse_u64_from_string(entity.guild_id)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            lang: entity.lang.parse().unwrap_or(DEFAULT_LANGUAGE),
            prefix: entity.prefix,
        })
    }
}

/// Partial update of a guild's settings. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateGuildSettingsParam {
    pub lang: Option<Language>,
    pub prefix: Option<String>,
}

/// Validates a requested command prefix.
///
/// Prefixes must be 1 to 3 visible characters without whitespace.
pub fn validate_prefix(prefix: &str) -> Option<String> {
    let prefix = prefix.trim();
    let len = prefix.chars().count();

    if len == 0 || len > MAX_PREFIX_LEN || prefix.chars().any(char::is_whitespace) {
        return None;
    }

    Some(prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_names_and_codes() {
        assert_eq!("Spanish".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn validates_prefix_length() {
        assert_eq!(validate_prefix("!p"), Some("!p".to_string()));
        assert_eq!(validate_prefix(" ? "), Some("?".to_string()));
        assert_eq!(validate_prefix(""), None);
        assert_eq!(validate_prefix("!!!!"), None);
        assert_eq!(validate_prefix("! p"), None);
    }

    #[test]
    fn falls_back_to_default_language() {
        let now = chrono::Utc::now();
        let settings = GuildSettings::from_entity(entity::guild_settings::Model {
            id: 1,
            guild_id: "42".to_string(),
            lang: "french".to_string(),
            prefix: "!p".to_string(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        assert_eq!(settings.lang, Language::English);
        assert_eq!(settings.guild_id, 42);
    }
}
