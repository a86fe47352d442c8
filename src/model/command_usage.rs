//! Domain model for command invocation counters.

use chrono::{DateTime, Utc};

/// How often a slash command has been invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandUsage {
    pub command: String,
    pub count: i64,
    pub last_used_at: DateTime<Utc>,
}

impl CommandUsage {
    /// Converts an entity model to a usage domain model at the repository boundary.
    pub fn from_entity(entity: entity::command_usage::Model) -> Self {
        Self {
            command: entity.command,
            count: entity.count,
            last_used_at: entity.last_used_at,
        }
    }
}
