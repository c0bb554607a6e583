//! DST transition dates under the US rule: spring forward on the second
//! Sunday of March, fall back on the first Sunday of November, each at
//! 02:00 local time.
//!
//! Locating the Sundays is plain day-of-week modular arithmetic; no calendar
//! rule library is involved.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::civil::{offset_hours_in, parse_tz, reference_instant};
use crate::error::{Result, ScheduleError};

/// Local hour at which US DST transitions take effect.
const TRANSITION_LOCAL_HOUR: u32 = 2;

/// A single DST transition: the scheduled wall-clock time and the moment it
/// actually happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstTransition {
    /// The scheduled local wall-clock time (02:00 on the transition day).
    /// On the spring-forward day this wall time does not exist, and on the
    /// fall-back day it occurs twice; `instant` disambiguates.
    pub local_wall_time: NaiveDateTime,
    /// The UTC instant of the transition, resolved through the offset in
    /// force just before the clock change.
    pub instant: DateTime<Utc>,
}

/// The two DST transitions of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstTransitionPair {
    pub year: i32,
    pub spring_forward: DstTransition,
    pub fall_back: DstTransition,
}

/// The nth Sunday of a month: `first_sunday = 1 + (7 - weekday_of_the_1st) mod 7`,
/// then advance in whole weeks.
fn nth_sunday(year: i32, month: u32, nth: u32) -> Result<NaiveDate> {
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::InvalidYear(year))?;
    let first_sunday = 1 + (7 - first_of_month.weekday().num_days_from_sunday()) % 7;
    let day = first_sunday + 7 * (nth - 1);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidYear(year))
}

fn transition_wall_time(date: NaiveDate, year: i32) -> Result<NaiveDateTime> {
    date.and_hms_opt(TRANSITION_LOCAL_HOUR, 0, 0)
        .ok_or(ScheduleError::InvalidYear(year))
}

fn resolve_instant(local: NaiveDateTime, offset_hours: f64) -> DateTime<Utc> {
    (local + Duration::seconds((offset_hours * 3600.0) as i64)).and_utc()
}

/// Compute the DST transition pair for a calendar year.
///
/// The US rule is applied regardless of zone: second Sunday of March and
/// first Sunday of November, at 02:00 local. The `timezone` parameter
/// resolves the wall-clock times to UTC instants, so any zone following the
/// US rule (New_York, Chicago, Denver, Los_Angeles) gets correct instants.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` for an unknown IANA identifier,
/// or `ScheduleError::InvalidYear` for years outside chrono's range.
pub fn dst_transitions(year: i32, timezone: &str) -> Result<DstTransitionPair> {
    let tz = parse_tz(timezone)?;

    // Standard offset from the winter probe, daylight offset from the summer
    // probe. Spring forward happens while standard time is still in force,
    // fall back while daylight time is still in force.
    let standard = offset_hours_in(reference_instant(year, 1, 1)?, tz);
    let daylight = offset_hours_in(reference_instant(year, 7, 1)?, tz);

    let spring_wall = transition_wall_time(nth_sunday(year, 3, 2)?, year)?;
    let fall_wall = transition_wall_time(nth_sunday(year, 11, 1)?, year)?;

    Ok(DstTransitionPair {
        year,
        spring_forward: DstTransition {
            local_wall_time: spring_wall,
            instant: resolve_instant(spring_wall, standard),
        },
        fall_back: DstTransition {
            local_wall_time: fall_wall,
            instant: resolve_instant(fall_wall, daylight),
        },
    })
}
