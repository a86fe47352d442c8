use crate::{data::command_usage::CommandUsageRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod increment;
