//! Background jobs.

pub mod presence;
