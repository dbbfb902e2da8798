// ABOUTME: Date key helpers converting between calendar dates and `YYYY-MM-DD` keys
// ABOUTME: Local "today", strict key parsing and key formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_core::constants::DATE_KEY_FORMAT;
use calorie_core::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

/// Format a date as a log key
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today's local date as a log key
#[must_use]
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Parse a `YYYY-MM-DD` key
///
/// # Errors
///
/// Returns an `InvalidFormat` error when `key` is not a calendar date
pub fn parse_date_key(key: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|e| AppError::parse(format!("invalid date key {key:?}: {e}")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7);
        assert_eq!(date.map(date_key).as_deref(), Some("2024-01-07"));
        assert_eq!(parse_date_key("2024-01-07").ok(), date);
    }

    #[test]
    fn non_dates_are_rejected() {
        assert!(parse_date_key("2024-02-30").is_err());
        assert!(parse_date_key("yesterday").is_err());
        assert!(parse_date_key("").is_err());
    }

    #[test]
    fn today_is_a_valid_key() {
        assert!(parse_date_key(&today_key()).is_ok());
    }
}
