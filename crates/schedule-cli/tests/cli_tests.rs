//! Integration tests for the `sched` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, pinning the evaluation instant with `--at` so
//! the output is deterministic regardless of when the suite runs.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// An instant well inside EDT (UTC-4).
const SUMMER: &str = "2024-07-01T12:00:00Z";
/// An instant well inside EST (UTC-5).
const WINTER: &str = "2024-01-01T12:00:00Z";
/// The day before the 2024 spring-forward transition (07:00 UTC Mar 10).
const PRE_SPRING: &str = "2024-03-09T12:00:00Z";

fn sched() -> Command {
    Command::cargo_bin("sched").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// info subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn info_during_edt() {
    sched()
        .args(["info", "--at", SUMMER])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_daylight_saving\": true"))
        .stdout(predicate::str::contains("\"utc_offset_hours\": 4"))
        .stdout(predicate::str::contains(
            "\"utc_hour_for_target_local_hour\": 13",
        ));
}

#[test]
fn info_during_est() {
    sched()
        .args(["info", "--at", WINTER])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_daylight_saving\": false"))
        .stdout(predicate::str::contains("\"utc_offset_hours\": 5"));
}

#[test]
fn info_output_is_valid_json() {
    let output = sched()
        .args(["info", "--at", SUMMER, "--hour", "17"])
        .output()
        .expect("info should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON");
    assert_eq!(json["utc_hour_for_target_local_hour"], 21);
}

#[test]
fn info_accepts_other_timezones() {
    sched()
        .args(["info", "--timezone", "Asia/Tokyo", "--at", SUMMER])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_daylight_saving\": false"))
        .stdout(predicate::str::contains("\"utc_offset_hours\": -9"));
}

// ─────────────────────────────────────────────────────────────────────────────
// transitions subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn transitions_for_2024() {
    sched()
        .args(["transitions", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-10"))
        .stdout(predicate::str::contains("2024-11-03"))
        .stdout(predicate::str::contains("spring_forward"))
        .stdout(predicate::str::contains("fall_back"));
}

#[test]
fn transitions_default_year_comes_from_at() {
    sched()
        .args(["transitions", "--at", "2026-06-15T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-08"))
        .stdout(predicate::str::contains("2026-11-01"));
}

// ─────────────────────────────────────────────────────────────────────────────
// cron subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cron_monday_nine_am_during_edt() {
    sched()
        .args(["cron", "--at", SUMMER])
        .assert()
        .success()
        .stdout("0 13 * * 1\n");
}

#[test]
fn cron_monday_nine_am_during_est() {
    sched()
        .args(["cron", "--at", WINTER])
        .assert()
        .success()
        .stdout("0 14 * * 1\n");
}

#[test]
fn cron_sunday_uses_weekday_zero() {
    sched()
        .args(["cron", "--weekday", "sunday", "--at", SUMMER])
        .assert()
        .success()
        .stdout("0 13 * * 0\n");
}

#[test]
fn cron_rejects_bad_weekday() {
    sched()
        .args(["cron", "--weekday", "someday", "--at", SUMMER])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weekday"));
}

#[test]
fn cron_rejects_out_of_range_hour() {
    sched()
        .args(["cron", "--hour", "24", "--at", SUMMER])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_flags_imminent_spring_forward() {
    sched()
        .args(["check", "--at", PRE_SPRING])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"needs_update\": true"))
        .stdout(predicate::str::contains("Spring forward transition"));
}

#[test]
fn check_is_quietly_fresh_in_midsummer() {
    sched()
        .args(["check", "--at", SUMMER])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"needs_update\": false"));
}

// ─────────────────────────────────────────────────────────────────────────────
// validate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_current_expression() {
    sched()
        .args(["validate", "0 13 * * 1", "--at", SUMMER])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_valid\": true"));
}

#[test]
fn validate_rejects_stale_expression_with_nonzero_exit() {
    // The EDT expression checked during EST: off by an hour, exit 1 so CI
    // can gate on it.
    sched()
        .args(["validate", "0 13 * * 1", "--at", WINTER])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"is_valid\": false"))
        .stdout(predicate::str::contains("0 14 * * 1"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling and help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_timezone_fails_with_message() {
    sched()
        .args(["info", "--timezone", "Mars/Olympus_Mons", "--at", SUMMER])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn invalid_at_instant_fails_with_message() {
    sched()
        .args(["info", "--at", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --at instant"));
}

#[test]
fn help_lists_all_subcommands() {
    sched()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("transitions"))
        .stdout(predicate::str::contains("cron"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn unknown_subcommand_fails() {
    sched()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}
