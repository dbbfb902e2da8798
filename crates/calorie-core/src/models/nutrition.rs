// ABOUTME: Food logging models: nutrients, foods, meal types, day logs and the date-keyed log map
// ABOUTME: Immutable values with Arc-shared sequences so updates copy only the touched path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::normalize::{deserialize_amount, normalize_or_zero, sanitize_amount, NutrientValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Nutrient amounts for one logged food.
///
/// Every field is a non-negative finite number. Values arriving as strings
/// (`"12g"`) are normalized when the struct is built or deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kcal
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub calories: f64,
    /// Protein in grams
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub fat: f64,
}

impl Nutrients {
    /// Build from numeric amounts, clamping anything negative or non-finite to zero
    #[must_use]
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: sanitize_amount(calories),
            protein: sanitize_amount(protein),
            carbs: sanitize_amount(carbs),
            fat: sanitize_amount(fat),
        }
    }

    /// Same amounts with anything negative or non-finite clamped to zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Build from upstream values that may be numbers or unit-suffixed strings
    #[must_use]
    pub fn from_values(
        calories: &NutrientValue,
        protein: &NutrientValue,
        carbs: &NutrientValue,
        fat: &NutrientValue,
    ) -> Self {
        Self {
            calories: normalize_or_zero(calories),
            protein: normalize_or_zero(protein),
            carbs: normalize_or_zero(carbs),
            fat: normalize_or_zero(fat),
        }
    }
}

/// One logged food item.
///
/// Logs hold their own copies, so a later change to a catalog entry with the
/// same `id` never alters past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Upstream menu item id; not unique within a log
    pub id: u64,
    /// Display title
    pub title: String,
    /// Restaurant chain the item belongs to
    #[serde(default)]
    pub restaurant_chain: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Nutrient amounts
    #[serde(default)]
    pub nutrients: Nutrients,
}

/// Meal a food is logged under. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Lowercase name used in persisted data
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    /// Case-insensitive, so `"Breakfast"` from a meal tab parses too
    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(AppError::invalid_input(format!(
                "unknown meal type: {other:?}"
            ))),
        }
    }
}

fn empty_meal() -> Arc<[Food]> {
    Arc::from(Vec::new())
}

/// One date's foods, keyed by meal. Sequence order is the order foods were
/// added and is what index-based removal refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    /// Breakfast foods
    #[serde(default = "empty_meal")]
    pub breakfast: Arc<[Food]>,
    /// Lunch foods
    #[serde(default = "empty_meal")]
    pub lunch: Arc<[Food]>,
    /// Dinner foods
    #[serde(default = "empty_meal")]
    pub dinner: Arc<[Food]>,
}

impl Default for DayLog {
    fn default() -> Self {
        Self {
            breakfast: empty_meal(),
            lunch: empty_meal(),
            dinner: empty_meal(),
        }
    }
}

impl DayLog {
    /// Foods logged under `meal`
    #[must_use]
    pub fn meal(&self, meal: MealType) -> &[Food] {
        self.meal_shared(meal)
    }

    /// Shared handle to the sequence for `meal`
    #[must_use]
    pub const fn meal_shared(&self, meal: MealType) -> &Arc<[Food]> {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    /// Copy of this day with `meal` replaced; other meals stay shared
    #[must_use]
    pub fn with_meal(&self, meal: MealType, foods: Arc<[Food]>) -> Self {
        let mut next = self.clone();
        match meal {
            MealType::Breakfast => next.breakfast = foods,
            MealType::Lunch => next.lunch = foods,
            MealType::Dinner => next.dinner = foods,
        }
        next
    }

    /// Every food of the day: breakfast, then lunch, then dinner
    pub fn all_foods(&self) -> impl Iterator<Item = &Food> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }

    /// Total number of logged foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }

    /// Whether no food is logged for any meal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canonical empty day returned for dates that were never logged
fn empty_day() -> &'static Arc<DayLog> {
    static EMPTY: OnceLock<Arc<DayLog>> = OnceLock::new();
    EMPTY.get_or_init(|| Arc::new(DayLog::default()))
}

/// Food logs keyed by date (`YYYY-MM-DD`).
///
/// Dates appear only once something has been logged for them. Lookups are
/// total: a missing date reads as an empty [`DayLog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodLogs {
    days: BTreeMap<String, Arc<DayLog>>,
}

impl FoodLogs {
    /// Empty log map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Day log for `date`, or the canonical empty day
    #[must_use]
    pub fn lookup(&self, date: &str) -> Arc<DayLog> {
        Arc::clone(self.days.get(date).unwrap_or_else(|| empty_day()))
    }

    /// Foods for `(date, meal)`, empty when absent
    #[must_use]
    pub fn meal(&self, date: &str, meal: MealType) -> &[Food] {
        self.days.get(date).map_or(&[][..], |day| day.meal(meal))
    }

    /// Stored day for `date`, without defaulting
    #[must_use]
    pub fn get(&self, date: &str) -> Option<&Arc<DayLog>> {
        self.days.get(date)
    }

    /// Whether `date` has an entry
    #[must_use]
    pub fn contains_date(&self, date: &str) -> bool {
        self.days.contains_key(date)
    }

    /// Copy of the logs with `date` set to `day`; every other day stays shared
    #[must_use]
    pub fn with_day(&self, date: &str, day: Arc<DayLog>) -> Self {
        let mut days = self.days.clone();
        days.insert(date.to_owned(), day);
        Self { days }
    }

    /// Dates with entries, in ascending key order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Number of dates with entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no date has an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
