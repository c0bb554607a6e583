//! `sched` CLI — DST-safe cron schedule calculation from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is DST active in Eastern time right now, and what UTC hour is 9 AM local?
//! sched info
//!
//! # This year's DST transition instants
//! sched transitions
//!
//! # UTC cron expression for Monday 9 AM Eastern
//! sched cron --hour 9 --weekday mon
//!
//! # Has a DST transition just happened (or is one about to)?
//! sched check
//!
//! # Gate CI on a deployed expression still being correct
//! sched validate "0 13 * * 1"
//!
//! # Pin the evaluation instant for deterministic output
//! sched info --at 2026-03-08T12:00:00Z
//! ```
//!
//! All structured output is pretty-printed JSON on stdout so it can feed
//! automation. `validate` exits non-zero on a mismatch.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Datelike, Utc, Weekday};
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "sched", version, about = "DST-safe UTC cron schedule calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Evaluate at this instant instead of the current time (RFC 3339,
    /// e.g. 2026-03-08T12:00:00Z)
    #[arg(long, global = true)]
    at: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show DST status and the UTC hour for a target local hour
    Info {
        /// IANA timezone identifier
        #[arg(long, default_value = "America/New_York")]
        timezone: String,
        /// Target local wall-clock hour (0-23)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
    },
    /// Show the DST transition instants for a calendar year
    Transitions {
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// IANA timezone identifier
        #[arg(long, default_value = "America/New_York")]
        timezone: String,
    },
    /// Generate the UTC cron expression for a weekly local-time job
    Cron {
        /// IANA timezone identifier
        #[arg(long, default_value = "America/New_York")]
        timezone: String,
        /// Target local wall-clock hour (0-23)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
        /// Target weekday (e.g. mon, tuesday)
        #[arg(long, default_value = "mon")]
        weekday: String,
    },
    /// Check whether a DST transition makes the deployed schedule stale
    Check {
        /// IANA timezone identifier
        #[arg(long, default_value = "America/New_York")]
        timezone: String,
        /// Target local wall-clock hour (0-23)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
        /// Target weekday (e.g. mon, tuesday)
        #[arg(long, default_value = "mon")]
        weekday: String,
    },
    /// Validate a deployed cron expression against the expected one
    Validate {
        /// The cron expression to check (e.g. "0 13 * * 1")
        expression: String,
        /// IANA timezone identifier
        #[arg(long, default_value = "America/New_York")]
        timezone: String,
        /// Target local wall-clock hour (0-23)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
        /// Target weekday (e.g. mon, tuesday)
        #[arg(long, default_value = "mon")]
        weekday: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let now = resolve_now(cli.at.as_deref())?;

    match cli.command {
        Commands::Info { timezone, hour } => {
            let info = schedule_engine::civil_time_info(&timezone, hour, now)
                .context("Failed to compute civil time info")?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Transitions { year, timezone } => {
            let year = year.unwrap_or_else(|| now.year());
            let pair = schedule_engine::dst_transitions(year, &timezone)
                .context("Failed to compute DST transitions")?;
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
        Commands::Cron {
            timezone,
            hour,
            weekday,
        } => {
            let weekday = parse_weekday(&weekday)?;
            let expression =
                schedule_engine::weekly_cron_expression(&timezone, hour, weekday, now)
                    .context("Failed to generate cron expression")?;
            // Plain line, not JSON: this gets pasted into scheduler config.
            println!("{}", expression);
        }
        Commands::Check {
            timezone,
            hour,
            weekday,
        } => {
            let weekday = parse_weekday(&weekday)?;
            let verdict = schedule_engine::evaluate_freshness(&timezone, hour, weekday, now)
                .context("Failed to evaluate schedule freshness")?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Commands::Validate {
            expression,
            timezone,
            hour,
            weekday,
        } => {
            let weekday = parse_weekday(&weekday)?;
            let validation =
                schedule_engine::validate_expression(&expression, &timezone, hour, weekday, now)
                    .context("Failed to validate cron expression")?;
            println!("{}", serde_json::to_string_pretty(&validation)?);
            if !validation.is_valid {
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Resolve the evaluation instant: `--at` wins, otherwise the ambient clock.
/// Captured once here so every computation in one invocation sees the same
/// clock reading.
fn resolve_now(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --at instant: '{}'", raw))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn parse_weekday(raw: &str) -> Result<Weekday> {
    match raw.parse::<Weekday>() {
        Ok(weekday) => Ok(weekday),
        Err(_) => bail!(
            "Invalid weekday: '{}'. Use names like mon, tue, wednesday.",
            raw
        ),
    }
}
