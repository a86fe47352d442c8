//! Command usage factory for creating invocation counter rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test command usage counters.
pub struct CommandUsageFactory<'a> {
    db: &'a DatabaseConnection,
    command: String,
    count: i64,
}

impl<'a> CommandUsageFactory<'a> {
    /// Creates a new factory with a unique command name and a count of 1.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            command: format!("command-{}", next_id()),
            count: 1,
        }
    }

    /// Sets the command name.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Sets the stored invocation count.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Builds and inserts the counter row into the database.
    pub async fn build(self) -> Result<entity::command_usage::Model, DbErr> {
        entity::command_usage::ActiveModel {
            id: ActiveValue::NotSet,
            command: ActiveValue::Set(self.command),
            count: ActiveValue::Set(self.count),
            last_used_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a command usage row with default values.
pub async fn create_command_usage(
    db: &DatabaseConnection,
) -> Result<entity::command_usage::Model, DbErr> {
    CommandUsageFactory::new(db).build().await
}
