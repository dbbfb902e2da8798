// ABOUTME: Daily nutrient aggregation over day logs: totals, per-meal calories and target progress
// ABOUTME: Pure functions plus the 7-day calorie trend and a bundled daily summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Daily Aggregator
//!
//! Pure functions deriving display metrics from a [`DayLog`]. Nothing here is
//! stored; results are recomputed from the latest store snapshot.
//!
//! Nutrient amounts are normalized to numbers when foods enter the log, so
//! the sums below never have to coerce strings.

use crate::dates::date_key;
use calorie_core::constants::{
    DAILY_CALORIE_TARGET, DAILY_CARBS_TARGET_G, DAILY_FAT_TARGET_G, DAILY_PROTEIN_TARGET_G,
    TREND_DAYS,
};
use calorie_core::models::{DayLog, Food, FoodLogs, MealType, Nutrients};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Chart label format for trend points (`Jan 03`)
const TREND_LABEL_FORMAT: &str = "%b %d";

fn sum_by(day: &DayLog, amount: impl Fn(&Nutrients) -> f64) -> f64 {
    day.all_foods().map(|food: &Food| amount(&food.nutrients)).sum()
}

/// Calories across breakfast, lunch and dinner
#[must_use]
pub fn total_calories(day: &DayLog) -> f64 {
    sum_by(day, |n| n.calories)
}

/// Protein grams across all meals
#[must_use]
pub fn total_protein(day: &DayLog) -> f64 {
    sum_by(day, |n| n.protein)
}

/// Carbohydrate grams across all meals
#[must_use]
pub fn total_carbs(day: &DayLog) -> f64 {
    sum_by(day, |n| n.carbs)
}

/// Fat grams across all meals
#[must_use]
pub fn total_fat(day: &DayLog) -> f64 {
    sum_by(day, |n| n.fat)
}

/// Calories for a single meal
#[must_use]
pub fn per_meal_calories(day: &DayLog, meal: MealType) -> f64 {
    day.meal(meal).iter().map(|food| food.nutrients.calories).sum()
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `target` reached, as a percentage capped at 100 and rounded to
/// two decimals.
///
/// The cap only affects the progress indicator; the underlying total is
/// never clamped. A non-positive target yields 0.
#[must_use]
pub fn percent_achieved(total_calories: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    round2((total_calories / target).min(1.0) * 100.0)
}

/// Uncapped percentage of `target`, as used by the macro progress bars.
/// A non-positive target yields 0.
#[must_use]
pub fn nutrient_progress(value: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    value / target * 100.0
}

/// All four daily totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Total kcal
    pub calories: f64,
    /// Total protein grams
    pub protein: f64,
    /// Total carbohydrate grams
    pub carbs: f64,
    /// Total fat grams
    pub fat: f64,
}

impl DailyTotals {
    /// Compute totals for one day
    #[must_use]
    pub fn for_day(day: &DayLog) -> Self {
        Self {
            calories: total_calories(day),
            protein: total_protein(day),
            carbs: total_carbs(day),
            fat: total_fat(day),
        }
    }
}

/// Fixed daily targets. Not personalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// kcal target
    pub calories: f64,
    /// Protein grams target
    pub protein: f64,
    /// Carbohydrate grams target
    pub carbs: f64,
    /// Fat grams target
    pub fat: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: DAILY_CALORIE_TARGET,
            protein: DAILY_PROTEIN_TARGET_G,
            carbs: DAILY_CARBS_TARGET_G,
            fat: DAILY_FAT_TARGET_G,
        }
    }
}

/// Macronutrient shown as a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    /// Protein
    Protein,
    /// Fat
    Fat,
    /// Carbohydrates
    Carbs,
}

impl Macro {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Fat => "Fat",
            Self::Carbs => "Carbs",
        }
    }
}

/// One macro progress bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Which macro
    pub nutrient: Macro,
    /// Grams eaten
    pub value: f64,
    /// Grams targeted
    pub target: f64,
    /// Uncapped percentage of target
    pub percent: f64,
}

impl MacroProgress {
    fn new(nutrient: Macro, value: f64, target: f64) -> Self {
        Self {
            nutrient,
            value,
            target,
            percent: nutrient_progress(value, target),
        }
    }
}

/// Everything the daily dashboard shows for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Date key the summary was computed for
    pub date: String,
    /// Uncapped totals
    pub totals: DailyTotals,
    /// Calories per meal in display order
    pub meal_calories: Vec<(MealType, f64)>,
    /// Calorie target
    pub calorie_target: f64,
    /// Capped, rounded percentage of the calorie target
    pub percent_achieved: f64,
    /// Protein, fat and carbs progress bars, in that order
    pub macros: Vec<MacroProgress>,
}

impl DailySummary {
    /// Summarize `day` against `targets`
    #[must_use]
    pub fn compute(date: &str, day: &DayLog, targets: &DailyTargets) -> Self {
        let totals = DailyTotals::for_day(day);
        Self {
            date: date.to_owned(),
            meal_calories: MealType::ALL
                .iter()
                .map(|&meal| (meal, per_meal_calories(day, meal)))
                .collect(),
            calorie_target: targets.calories,
            percent_achieved: percent_achieved(totals.calories, targets.calories),
            macros: vec![
                MacroProgress::new(Macro::Protein, totals.protein, targets.protein),
                MacroProgress::new(Macro::Fat, totals.fat, targets.fat),
                MacroProgress::new(Macro::Carbs, totals.carbs, targets.carbs),
            ],
            totals,
        }
    }
}

/// One day of the calorie trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Total kcal logged that day (0 when nothing was logged)
    pub calories: f64,
}

impl TrendPoint {
    /// Log key of the point's date
    #[must_use]
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// Chart axis label, e.g. `Jan 03`
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format(TREND_LABEL_FORMAT).to_string()
    }
}

/// Calories for the seven consecutive days ending at `end` (inclusive),
/// oldest first. Days without entries count as zero.
///
/// The window never reaches before [`NaiveDate::MIN`]: when `end` is within
/// six days of it, only the representable days are returned.
#[must_use]
pub fn weekly_calorie_trend(logs: &FoodLogs, end: NaiveDate) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
        .map(|date| TrendPoint {
            calories: total_calories(&logs.lookup(&date_key(date))),
            date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_rounded_to_two_decimals() {
        assert!((percent_achieved(1000.0, 3000.0) - 33.33).abs() < f64::EPSILON);
        assert!((percent_achieved(2000.0, 3000.0) - 66.67).abs() < f64::EPSILON);
    }

    #[test]
    fn non_positive_target_yields_zero() {
        assert!(percent_achieved(500.0, 0.0).abs() < f64::EPSILON);
        assert!(nutrient_progress(50.0, -1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn macro_progress_is_not_capped() {
        assert!((nutrient_progress(258.0, 129.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn trend_labels_use_short_month() {
        let point = TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap_or_default(),
            calories: 800.0,
        };
        assert_eq!(point.label(), "Jan 03");
        assert_eq!(point.date_key(), "2024-01-03");
    }

    #[test]
    fn trend_stops_at_earliest_representable_date() {
        let logs = FoodLogs::default();
        let earliest = weekly_calorie_trend(&logs, NaiveDate::MIN);
        assert_eq!(earliest.len(), 1);
        assert_eq!(earliest[0].date, NaiveDate::MIN);

        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap_or_default();
        assert_eq!(weekly_calorie_trend(&logs, end).len(), 7);
    }
}
