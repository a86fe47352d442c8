//! Bot-wide key/value settings repository.
//!
//! Holds settings that belong to the bot rather than a guild, such as the
//! activity text chosen by the bot owner.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Key of the manually chosen "Playing" activity.
pub const PLAYING_KEY: &str = "playing";

pub struct BotSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads a setting.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Setting is stored
    /// - `Ok(None)` - Setting was never written
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::BotSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.value))
    }

    /// Writes a setting, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::BotSetting::insert(entity::bot_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::bot_setting::Column::Key)
                .update_columns([
                    entity::bot_setting::Column::Value,
                    entity::bot_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(())
    }
}
