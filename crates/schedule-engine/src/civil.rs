//! Civil-time offset probing -- answers "is DST active right now, and what
//! UTC hour corresponds to a fixed local hour?".
//!
//! DST detection works from raw offset differences alone: the offset on a
//! winter reference date (January 1) is the standard-time baseline, the offset
//! on a summer reference date (July 1) reveals whether the zone observes DST
//! at all, and the current instant's offset is compared against the winter
//! baseline. No "is DST" primitive from the platform is required.

use chrono::{DateTime, Datelike, NaiveDate, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Snapshot of a timezone's relationship to UTC at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilTimeInfo {
    /// Whether daylight-saving time is in force at the queried instant.
    pub is_daylight_saving: bool,
    /// UTC offset in whole hours, positive west of UTC
    /// (America/New_York yields 4 during EDT, 5 during EST).
    pub utc_offset_hours: i32,
    /// The UTC hour at which the target local hour occurs:
    /// `(target_local_hour + utc_offset_hours) mod 24`.
    pub utc_hour_for_target_local_hour: u32,
}

/// Parse an IANA timezone identifier into a `chrono_tz::Tz`.
pub(crate) fn parse_tz(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))
}

/// UTC offset in hours for `instant` in `tz`, positive west of UTC.
/// Fractional offsets (e.g. Asia/Kolkata) come through as fractions.
pub(crate) fn offset_hours_in(instant: DateTime<Utc>, tz: Tz) -> f64 {
    let local_minus_utc = instant.with_timezone(&tz).offset().fix().local_minus_utc();
    -f64::from(local_minus_utc) / 3600.0
}

/// Noon UTC on the given calendar day. Noon keeps the probe on the intended
/// day in every zone within twelve hours of UTC.
pub(crate) fn reference_instant(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or(ScheduleError::InvalidYear(year))
}

/// Compute the UTC offset in hours for an instant in an IANA timezone.
///
/// Sign convention is positive west of UTC: America/New_York yields 5.0 in
/// winter and 4.0 in summer; Europe/London yields -1.0 during BST.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier.
pub fn utc_offset_hours(instant: DateTime<Utc>, timezone: &str) -> Result<f64> {
    let tz = parse_tz(timezone)?;
    Ok(offset_hours_in(instant, tz))
}

/// Derive [`CivilTimeInfo`] for a timezone at a given instant.
///
/// `now` is threaded explicitly so that one logical evaluation sees a single
/// consistent clock reading; helpers never read the ambient clock themselves.
///
/// # Arguments
/// - `timezone` -- IANA timezone identifier (e.g., "America/New_York")
/// - `target_local_hour` -- the local wall-clock hour of interest (0-23)
/// - `now` -- the instant to evaluate at
///
/// Zones that do not observe DST yield `is_daylight_saving = false` and a
/// constant offset; this is not an error. The winter-baseline comparison is
/// correct for northern-hemisphere zones with the standard DST pattern.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier.
pub fn civil_time_info(
    timezone: &str,
    target_local_hour: u32,
    now: DateTime<Utc>,
) -> Result<CivilTimeInfo> {
    let tz = parse_tz(timezone)?;
    let year = now.year();

    let winter = offset_hours_in(reference_instant(year, 1, 1)?, tz);
    let summer = offset_hours_in(reference_instant(year, 7, 1)?, tz);
    let current = offset_hours_in(now, tz);

    // A zone observes DST iff the two probes disagree; DST is active iff the
    // current offset has moved off the winter baseline.
    let observes_dst = (winter - summer).abs() > f64::EPSILON;
    let is_daylight_saving = observes_dst && (current - winter).abs() > f64::EPSILON;

    let utc_offset_hours = current.round() as i32;
    let utc_hour_for_target_local_hour =
        (i64::from(target_local_hour) + i64::from(utc_offset_hours)).rem_euclid(24) as u32;

    Ok(CivilTimeInfo {
        is_daylight_saving,
        utc_offset_hours,
        utc_hour_for_target_local_hour,
    })
}
