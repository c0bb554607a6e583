//! # schedule-engine
//!
//! DST-safe UTC cron schedule calculation for jobs pinned to a fixed local
//! wall-clock time.
//!
//! External cron infrastructure runs on UTC, but "every Monday at 9 AM
//! Eastern" is a civil-time requirement: the correct UTC hour changes twice a
//! year. This crate computes the current UTC hour for a target local hour,
//! generates the matching cron expression, locates the year's DST transition
//! instants, and flags the window around each transition during which a
//! previously deployed expression has gone stale.
//!
//! Every operation is a pure function of its arguments; `now` is always an
//! explicit parameter so one logical evaluation sees a single clock reading.
//!
//! ## Modules
//!
//! - [`civil`] — offset probing and [`CivilTimeInfo`]
//! - [`transition`] — US-rule DST transition dates for a calendar year
//! - [`cron`] — UTC cron expression generation and validation
//! - [`freshness`] — "the schedule may now be wrong" detection
//! - [`error`] — error types

pub mod civil;
pub mod cron;
pub mod error;
pub mod freshness;
pub mod transition;

pub use civil::{civil_time_info, utc_offset_hours, CivilTimeInfo};
pub use cron::{validate_expression, weekly_cron_expression, ScheduleValidation};
pub use error::ScheduleError;
pub use freshness::{evaluate_freshness, ScheduleUpdateVerdict, FRESHNESS_WINDOW_HOURS};
pub use transition::{dst_transitions, DstTransition, DstTransitionPair};
