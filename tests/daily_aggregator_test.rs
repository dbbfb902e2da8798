// ABOUTME: Integration tests for daily aggregation over store snapshots
// ABOUTME: Totals, per-meal calories, clamped progress, macro bars and the 7-day trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use calorie_tracker::intelligence::{
    per_meal_calories, percent_achieved, total_calories, total_carbs, total_fat, total_protein,
    weekly_calorie_trend, DailySummary, DailyTargets, Macro,
};
use calorie_tracker::models::{DayLog, MealType};
use calorie_tracker::storage::InMemoryStorage;
use calorie_tracker::store::FoodLogStore;
use chrono::NaiveDate;
use common::{approx, food, food_kcal, init_test_logging};
use std::sync::Arc;

fn store() -> FoodLogStore {
    init_test_logging();
    FoodLogStore::load(Arc::new(InMemoryStorage::new()))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn empty_day_totals_zero() {
    let day = DayLog::default();
    assert!(approx(total_calories(&day), 0.0));
    assert!(approx(total_protein(&day), 0.0));
    assert!(approx(total_carbs(&day), 0.0));
    assert!(approx(total_fat(&day), 0.0));
    for meal in MealType::ALL {
        assert!(approx(per_meal_calories(&day, meal), 0.0));
    }
}

#[test]
fn breakfast_and_lunch_scenario() {
    let store = store();
    store.add_food("2024-01-01", MealType::Breakfast, food_kcal(1, 500.0));
    store.add_food("2024-01-01", MealType::Lunch, food_kcal(2, 700.0));

    let day = store.get_log("2024-01-01");
    let total = total_calories(&day);
    assert!(approx(total, 1200.0));
    assert!(approx(percent_achieved(total, 2500.0), 48.0));
    assert!(approx(per_meal_calories(&day, MealType::Breakfast), 500.0));
    assert!(approx(per_meal_calories(&day, MealType::Lunch), 700.0));
    assert!(approx(per_meal_calories(&day, MealType::Dinner), 0.0));
}

#[test]
fn percent_clamps_but_total_does_not() {
    let store = store();
    store.add_food("2024-01-01", MealType::Dinner, food_kcal(1, 3000.0));

    let day = store.get_log("2024-01-01");
    assert!(approx(total_calories(&day), 3000.0));
    assert!(approx(percent_achieved(total_calories(&day), 2500.0), 100.0));
}

#[test]
fn macros_sum_across_meals() {
    let store = store();
    store.add_food("2024-01-01", MealType::Breakfast, food(1, "Eggs", 220.0, 18.0, 2.0, 15.0));
    store.add_food("2024-01-01", MealType::Lunch, food(2, "Wrap", 410.0, 22.0, 48.0, 14.0));
    store.add_food("2024-01-01", MealType::Dinner, food(3, "Steak", 600.0, 50.0, 0.0, 42.0));

    let day = store.get_log("2024-01-01");
    assert!(approx(total_protein(&day), 90.0));
    assert!(approx(total_carbs(&day), 50.0));
    assert!(approx(total_fat(&day), 71.0));
}

#[test]
fn weekly_trend_defaults_missing_days_to_zero() {
    let store = store();
    store.add_food("2024-01-03", MealType::Lunch, food_kcal(1, 800.0));
    store.add_food("2024-01-07", MealType::Dinner, food_kcal(2, 500.0));
    // Outside the window
    store.add_food("2023-12-31", MealType::Dinner, food_kcal(3, 999.0));

    let trend = weekly_calorie_trend(&store.food_logs(), ymd(2024, 1, 7));
    let pairs: Vec<(String, f64)> = trend.iter().map(|p| (p.date_key(), p.calories)).collect();
    assert_eq!(
        pairs,
        vec![
            ("2024-01-01".to_owned(), 0.0),
            ("2024-01-02".to_owned(), 0.0),
            ("2024-01-03".to_owned(), 800.0),
            ("2024-01-04".to_owned(), 0.0),
            ("2024-01-05".to_owned(), 0.0),
            ("2024-01-06".to_owned(), 0.0),
            ("2024-01-07".to_owned(), 500.0),
        ]
    );
    assert_eq!(trend[2].label(), "Jan 03");
}

#[test]
fn weekly_trend_crosses_month_and_year() {
    let store = store();
    store.add_food("2023-12-30", MealType::Lunch, food_kcal(1, 400.0));

    let trend = weekly_calorie_trend(&store.food_logs(), ymd(2024, 1, 2));
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].date, ymd(2023, 12, 27));
    assert_eq!(trend[6].date, ymd(2024, 1, 2));
    assert!(approx(trend[3].calories, 400.0));
}

#[test]
fn daily_summary_bundles_dashboard_values() {
    let store = store();
    store.add_food("2024-01-01", MealType::Breakfast, food(1, "Oats", 300.0, 10.0, 54.0, 5.0));
    store.add_food("2024-01-01", MealType::Dinner, food(2, "Salmon", 2900.0, 119.0, 0.0, 65.0));

    let summary = DailySummary::compute(
        "2024-01-01",
        &store.get_log("2024-01-01"),
        &DailyTargets::default(),
    );

    assert_eq!(summary.date, "2024-01-01");
    assert!(approx(summary.totals.calories, 3200.0));
    assert!(approx(summary.percent_achieved, 100.0));
    assert!(approx(summary.calorie_target, 2500.0));
    assert_eq!(
        summary.meal_calories,
        vec![
            (MealType::Breakfast, 300.0),
            (MealType::Lunch, 0.0),
            (MealType::Dinner, 2900.0),
        ]
    );

    let protein = &summary.macros[0];
    assert_eq!(protein.nutrient, Macro::Protein);
    assert!(approx(protein.value, 129.0));
    assert!(approx(protein.percent, 100.0));

    let fat = &summary.macros[1];
    assert_eq!(fat.nutrient, Macro::Fat);
    assert!(approx(fat.percent, 100.0));

    let carbs = &summary.macros[2];
    assert_eq!(carbs.nutrient, Macro::Carbs);
    assert!(approx(carbs.percent, 18.0));
}
