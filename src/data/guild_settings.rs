//! Guild settings data repository.
//!
//! Stores one row per guild with the reply language and text command prefix. Rows
//! are created lazily the first time a guild runs a command or the bot joins it.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::guild_settings::{
    GuildSettings, UpdateGuildSettingsParam, DEFAULT_LANGUAGE, DEFAULT_PREFIX,
};

/// Repository providing database operations for guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings row for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))` - Settings exist for the guild
    /// - `Ok(None)` - Guild has never been seen
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildSettings>, DbErr> {
        let entity = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(GuildSettings::from_entity).transpose()
    }

    /// Returns a guild's settings, inserting defaults on first use.
    ///
    /// The insert ignores unique conflicts so two interactions racing on a new
    /// guild both end up reading the same row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Existing or freshly created settings
    /// - `Err(DbErr)` - Database error during insert or query
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildSettings, DbErr> {
        if let Some(settings) = self.find_by_guild_id(guild_id).await? {
            return Ok(settings);
        }

        let now = Utc::now();
        entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            lang: ActiveValue::Set(DEFAULT_LANGUAGE.as_str().to_string()),
            prefix: ActiveValue::Set(DEFAULT_PREFIX.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild_settings for {guild_id}")))
    }

    /// Applies a partial update to a settings row.
    ///
    /// # Arguments
    /// - `id` - Settings row ID
    /// - `param` - Fields to change; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(true)` - Row existed and was updated
    /// - `Ok(false)` - No row with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateGuildSettingsParam) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::GuildSettings::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::guild_settings::ActiveModel = existing.into();
        if let Some(lang) = param.lang {
            active.lang = ActiveValue::Set(lang.as_str().to_string());
        }
        if let Some(prefix) = param.prefix {
            active.prefix = ActiveValue::Set(prefix);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        Ok(true)
    }
}
