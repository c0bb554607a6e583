//! Detect when a deployed cron expression is about to drift, or has just
//! drifted, across a DST transition.
//!
//! A fixed UTC cron expression for a local-time job silently fires one hour
//! off after each transition until someone regenerates it. This module flags
//! the window around each transition so an operator (or an automated redeploy
//! step outside this crate) can refresh the stored schedule. Nothing here
//! persists or redeploys anything.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::cron::weekly_cron_expression;
use crate::error::Result;
use crate::transition::dst_transitions;

/// Width of the "schedule may now be wrong" window on each side of a
/// transition instant. Existing automation runs the check roughly daily and
/// depends on this exact value; do not tune it.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

/// Verdict on whether the deployed schedule needs regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleUpdateVerdict {
    pub needs_update: bool,
    /// Which transition triggered the verdict, when `needs_update` is true.
    pub reason: Option<String>,
    /// The freshly regenerated cron expression, when `needs_update` is true.
    pub recommended_expression: Option<String>,
    /// The transition instant that is within the window.
    pub transition_instant: Option<DateTime<Utc>>,
}

/// Evaluate whether `now` is within [`FRESHNESS_WINDOW_HOURS`] (inclusive) of
/// either DST transition of `now`'s year.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier.
pub fn evaluate_freshness(
    timezone: &str,
    target_local_hour: u32,
    target_weekday: Weekday,
    now: DateTime<Utc>,
) -> Result<ScheduleUpdateVerdict> {
    let transitions = dst_transitions(now.year(), timezone)?;
    let window = Duration::hours(FRESHNESS_WINDOW_HOURS);

    let near = |instant: DateTime<Utc>| (now - instant).abs() <= window;

    let hit = if near(transitions.spring_forward.instant) {
        Some(("Spring forward transition", transitions.spring_forward.instant))
    } else if near(transitions.fall_back.instant) {
        Some(("Fall back transition", transitions.fall_back.instant))
    } else {
        None
    };

    match hit {
        Some((reason, instant)) => Ok(ScheduleUpdateVerdict {
            needs_update: true,
            reason: Some(reason.to_string()),
            recommended_expression: Some(weekly_cron_expression(
                timezone,
                target_local_hour,
                target_weekday,
                now,
            )?),
            transition_instant: Some(instant),
        }),
        None => Ok(ScheduleUpdateVerdict {
            needs_update: false,
            reason: None,
            recommended_expression: None,
            transition_instant: None,
        }),
    }
}
