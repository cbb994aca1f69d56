#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use timeaftertime::core::EntryRules;
use timeaftertime::models::TimeBase;
use timeaftertime::utils::DateNormalizer;

pub const HEADER: &str = "Date,Duration,Activity,Rate";

pub fn tat() -> Command {
    cargo_bin_cmd!("tat")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeaftertime", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Same as setup_test_dir, as a string for `--data-dir`
pub fn setup_test_dir_arg(name: &str) -> String {
    setup_test_dir(name).to_string_lossy().to_string()
}

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
}

/// Rules with default rate 20 and "today" pinned to 2025-09-15
pub fn rules(time_base: TimeBase) -> EntryRules {
    EntryRules::new(time_base, "20").with_dates(DateNormalizer::with_today(fixed_today()))
}
