//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service and bot layers never see entity types.

pub mod bot_setting;
pub mod command_usage;
pub mod guild_settings;

#[cfg(test)]
mod test;
