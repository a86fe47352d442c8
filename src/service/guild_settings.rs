use sea_orm::DatabaseConnection;

use crate::{
    data::guild_settings::GuildSettingsRepository,
    error::AppError,
    model::guild_settings::{validate_prefix, GuildSettings, Language, UpdateGuildSettingsParam},
};

pub struct GuildSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settings for the guild an interaction came from.
    ///
    /// Interactions outside a guild get unpersisted defaults.
    pub async fn for_interaction(&self, guild_id: Option<u64>) -> Result<GuildSettings, AppError> {
        match guild_id {
            Some(guild_id) => Ok(GuildSettingsRepository::new(self.db)
                .get_or_create(guild_id)
                .await?),
            None => Ok(GuildSettings::transient()),
        }
    }

    /// Changes the reply language of a guild
    pub async fn set_language(&self, guild_id: u64, lang: Language) -> Result<GuildSettings, AppError> {
        self.update(
            guild_id,
            UpdateGuildSettingsParam {
                lang: Some(lang),
                prefix: None,
            },
        )
        .await
    }

    /// Changes the text command prefix of a guild.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The updated settings
    /// - `Err(AppError::BadRequest)` - Prefix is empty, too long or contains whitespace
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<GuildSettings, AppError> {
        let prefix = validate_prefix(prefix)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid prefix '{}'", prefix)))?;

        self.update(
            guild_id,
            UpdateGuildSettingsParam {
                lang: None,
                prefix: Some(prefix),
            },
        )
        .await
    }

    async fn update(
        &self,
        guild_id: u64,
        param: UpdateGuildSettingsParam,
    ) -> Result<GuildSettings, AppError> {
        let repo = GuildSettingsRepository::new(self.db);

        let settings = repo.get_or_create(guild_id).await?;
        if !repo.update(settings.id, param).await? {
            return Err(AppError::NotFound(format!(
                "Settings for guild {} disappeared during update",
                guild_id
            )));
        }

        repo.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Settings for guild {} not found", guild_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Tests changing the language of a guild seen for the first time.
    ///
    /// Expected: row created with the new language and default prefix
    #[tokio::test]
    async fn sets_language_for_new_guild() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = GuildSettingsService::new(db)
            .set_language(4242, Language::Spanish)
            .await?;

        assert_eq!(settings.guild_id, 4242);
        assert_eq!(settings.lang, Language::Spanish);
        assert_eq!(settings.prefix, "!p");

        Ok(())
    }

    /// Tests rejecting a prefix with whitespace.
    ///
    /// Expected: Err(BadRequest) and stored prefix unchanged
    #[tokio::test]
    async fn rejects_invalid_prefix() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = GuildSettingsService::new(db);

        let result = service.set_prefix(4242, "a b").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let settings = service.for_interaction(Some(4242)).await?;
        assert_eq!(settings.prefix, "!p");

        Ok(())
    }

    /// Tests settings for interactions outside guilds.
    ///
    /// Expected: defaults without touching the database
    #[tokio::test]
    async fn direct_messages_use_defaults() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = GuildSettingsService::new(db).for_interaction(None).await?;

        assert_eq!(settings, GuildSettings::transient());

        Ok(())
    }
}
