use crate::{
    data::guild_settings::GuildSettingsRepository,
    error::AppError,
    model::guild_settings::{Language, UpdateGuildSettingsParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_or_create;
mod update;
