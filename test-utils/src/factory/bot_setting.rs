//! Bot setting factory for creating key/value rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a bot-wide setting.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Setting key, e.g. `"playing"`
/// - `value` - Stored value
///
/// # Returns
/// - `Ok(entity::bot_setting::Model)` - Created setting row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bot_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::bot_setting::Model, DbErr> {
    entity::bot_setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
