//! Command usage data repository.

use chrono::Utc;
use migration::{Expr, ExprTrait, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::command_usage::CommandUsage;

/// Repository counting slash command invocations.
pub struct CommandUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandUsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the counter for a command.
    pub async fn get(&self, command: &str) -> Result<Option<CommandUsage>, DbErr> {
        let entity = entity::prelude::CommandUsage::find()
            .filter(entity::command_usage::Column::Command.eq(command))
            .one(self.db)
            .await?;

        Ok(entity.map(CommandUsage::from_entity))
    }

    /// Increments the counter for a command, creating it at 1.
    ///
    /// The insert and the increment are one upsert statement, so concurrent
    /// invocations of the same command never lose a count.
    ///
    /// # Arguments
    /// - `command` - Slash command name
    ///
    /// # Returns
    /// - `Ok(CommandUsage)` - Counter as read right after the increment
    /// - `Err(DbErr)` - Database error during write or read
    pub async fn increment(&self, command: &str) -> Result<CommandUsage, DbErr> {
        entity::prelude::CommandUsage::insert(entity::command_usage::ActiveModel {
            id: ActiveValue::NotSet,
            command: ActiveValue::Set(command.to_string()),
            count: ActiveValue::Set(1),
            last_used_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::command_usage::Column::Command)
                .value(
                    entity::command_usage::Column::Count,
                    Expr::col(entity::command_usage::Column::Count).add(1),
                )
                .update_column(entity::command_usage::Column::LastUsedAt)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get(command)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("command_usage for {command}")))
    }

    /// All counters, most used first.
    pub async fn get_all(&self) -> Result<Vec<CommandUsage>, DbErr> {
        let entities = entity::prelude::CommandUsage::find()
            .order_by_desc(entity::command_usage::Column::Count)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CommandUsage::from_entity).collect())
    }
}
