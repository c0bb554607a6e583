//! UTC cron expression generation and validation for weekly local-time jobs.
//!
//! The generated expression pins a fixed local wall-clock time (say, Monday
//! 09:00 in America/New_York) to its current UTC hour. Because the UTC hour
//! moves at every DST transition, the expression is only valid until the next
//! transition; callers must regenerate it periodically (see
//! [`crate::freshness`]).

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::civil::civil_time_info;
use crate::error::Result;

/// Outcome of checking a deployed cron expression against the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleValidation {
    pub is_valid: bool,
    /// The expression that is correct for the current DST regime.
    pub expected_expression: String,
    /// Human-readable description of the outcome.
    pub message: String,
}

/// Generate the UTC cron expression (`minute hour * * weekday`) for a weekly
/// job at a fixed local hour.
///
/// Weekday numbering follows cron convention (Sunday = 0). The expression is
/// recomputed from the current UTC offset at `now`, so two calls within the
/// same DST regime yield an identical string.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier.
pub fn weekly_cron_expression(
    timezone: &str,
    target_local_hour: u32,
    target_weekday: Weekday,
    now: DateTime<Utc>,
) -> Result<String> {
    let info = civil_time_info(timezone, target_local_hour, now)?;
    Ok(format!(
        "0 {} * * {}",
        info.utc_hour_for_target_local_hour,
        target_weekday.num_days_from_sunday()
    ))
}

/// Check a caller-supplied cron expression against the freshly generated
/// expected one. Pure equality, no side effects.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier.
pub fn validate_expression(
    candidate: &str,
    timezone: &str,
    target_local_hour: u32,
    target_weekday: Weekday,
    now: DateTime<Utc>,
) -> Result<ScheduleValidation> {
    let expected = weekly_cron_expression(timezone, target_local_hour, target_weekday, now)?;
    let candidate = candidate.trim();
    let is_valid = candidate == expected;

    let message = if is_valid {
        format!("Schedule '{}' matches the current UTC offset", expected)
    } else {
        format!(
            "Schedule '{}' is out of date; expected '{}'",
            candidate, expected
        )
    };

    Ok(ScheduleValidation {
        is_valid,
        expected_expression: expected,
        message,
    })
}
