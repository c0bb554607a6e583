//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
