// ABOUTME: Nutrient value normalizer turning numbers or unit-suffixed strings into plain numbers
// ABOUTME: Strict parse for callers that care, lenient zero-fallback for aggregation and ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Value Normalizer
//!
//! The nutrition API reports macronutrients either as numbers (`12`) or as
//! strings with a gram suffix (`"12g"`). [`NutrientValue`] models that union
//! explicitly; it is collapsed into a single `f64` at the ingestion boundary so
//! stored foods and the aggregator only ever see numbers.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unit suffix stripped from string nutrient values
const GRAM_SUFFIX: char = 'g';

/// A nutrient amount as reported by an upstream source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    /// Plain numeric amount
    Number(f64),
    /// Amount with an optional trailing unit, e.g. `"12g"`
    Text(String),
}

impl From<f64> for NutrientValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NutrientValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Normalize a nutrient value into a number.
///
/// Numbers pass through unchanged. Strings are trimmed, a trailing `g` is
/// stripped, and the remainder is parsed as a float.
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the stripped string is not a finite
/// number (including the empty string).
pub fn normalize(value: &NutrientValue) -> AppResult<f64> {
    match value {
        NutrientValue::Number(n) => Ok(*n),
        NutrientValue::Text(s) => parse_nutrient_str(s),
    }
}

/// Parse a unit-suffixed nutrient string such as `"12g"` or `"4.5 g"`.
///
/// # Errors
///
/// Returns an `InvalidFormat` error when no finite number remains after the
/// suffix is stripped.
pub fn parse_nutrient_str(raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix(GRAM_SUFFIX)
        .unwrap_or(trimmed)
        .trim_end();

    match number.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(AppError::parse(format!("not a nutrient amount: {raw:?}"))),
    }
}

/// Normalize a nutrient value, treating anything unusable as zero.
///
/// Parse failures, non-finite numbers and negative amounts all become `0.0`,
/// which keeps every stored nutrient a non-negative finite number and every
/// aggregate total defined.
#[must_use]
pub fn normalize_or_zero(value: &NutrientValue) -> f64 {
    match normalize(value) {
        Ok(n) => sanitize_amount(n),
        Err(e) => {
            tracing::debug!(value = %value, error = %e, "nutrient value treated as zero");
            0.0
        }
    }
}

/// Clamp an amount into the non-negative finite range
#[must_use]
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Serde adapter that accepts a number, a unit-suffixed string or `null` and
/// yields a sanitized amount.
///
/// # Errors
///
/// Only fails when the JSON value is neither a number, a string nor `null`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NutrientValue>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, normalize_or_zero))
}
