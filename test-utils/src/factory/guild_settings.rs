//! Guild settings factory for creating test settings rows.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id(123456789u64)
///     .lang("spanish")
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    lang: String,
    prefix: String,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique snowflake
    /// - lang: `"english"`
    /// - prefix: `"!p"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake().to_string(),
            lang: "english".to_string(),
            prefix: "!p".to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    /// Sets the stored language name.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the stored command prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        let now = Utc::now();
        entity::guild_settings::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            lang: ActiveValue::Set(self.lang),
            prefix: ActiveValue::Set(self.prefix),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild settings row with default values.
///
/// Shorthand for `GuildSettingsFactory::new(db).build().await`.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_settings_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = create_guild_settings(db).await?;

        assert!(!settings.guild_id.is_empty());
        assert_eq!(settings.lang, "english");
        assert_eq!(settings.prefix, "!p");

        Ok(())
    }

    #[tokio::test]
    async fn creates_settings_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = GuildSettingsFactory::new(db)
            .guild_id(987654321)
            .lang("spanish")
            .prefix("?")
            .build()
            .await?;

        assert_eq!(settings.guild_id, "987654321");
        assert_eq!(settings.lang, "spanish");
        assert_eq!(settings.prefix, "?");

        Ok(())
    }
}
