use crate::{
    data::bot_setting::{BotSettingRepository, PLAYING_KEY},
    error::AppError,
};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod set;
