// ABOUTME: Criterion benchmarks for daily aggregation and food log mutations
// ABOUTME: Measures totals, weekly trend and copy-on-write add/remove over growing logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the aggregator and the food log store.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use calorie_tracker::dates::date_key;
use calorie_tracker::intelligence::{total_calories, weekly_calorie_trend, DailySummary, DailyTargets};
use calorie_tracker::models::{Food, MealType, Nutrients};
use calorie_tracker::storage::InMemoryStorage;
use calorie_tracker::store::FoodLogStore;
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

const END: &str = "2024-06-30";

fn sample_food(id: u64) -> Food {
    Food {
        id,
        title: format!("Menu item {id}"),
        restaurant_chain: "Bench Diner".to_owned(),
        image: String::new(),
        nutrients: Nutrients::new(350.0 + (id % 7) as f64 * 40.0, 20.0, 35.0, 12.0),
    }
}

/// Store with `days` consecutive days ending at `END`, `per_meal` foods per meal
fn populated_store(days: u64, per_meal: u64) -> FoodLogStore {
    let store = FoodLogStore::load(Arc::new(InMemoryStorage::new()));
    let end = NaiveDate::parse_from_str(END, "%Y-%m-%d").unwrap();
    for offset in 0..days {
        let date = date_key(end.checked_sub_days(Days::new(offset)).unwrap());
        for meal in MealType::ALL {
            for i in 0..per_meal {
                store.add_food(&date, meal, sample_food(offset * 100 + i));
            }
        }
    }
    store
}

fn bench_daily_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_totals");

    for per_meal in [1_u64, 5, 20] {
        let store = populated_store(1, per_meal);
        let day = store.get_log(END);
        group.throughput(Throughput::Elements(per_meal * 3));
        group.bench_with_input(
            BenchmarkId::new("total_calories", per_meal * 3),
            &day,
            |b, day| b.iter(|| total_calories(black_box(day))),
        );
        group.bench_with_input(
            BenchmarkId::new("daily_summary", per_meal * 3),
            &day,
            |b, day| {
                let targets = DailyTargets::default();
                b.iter(|| DailySummary::compute(END, black_box(day), &targets));
            },
        );
    }

    group.finish();
}

fn bench_weekly_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_trend");
    let end = NaiveDate::parse_from_str(END, "%Y-%m-%d").unwrap();

    for days in [7_u64, 90, 365] {
        let logs = populated_store(days, 2).food_logs();
        group.bench_with_input(BenchmarkId::new("logged_days", days), &logs, |b, logs| {
            b.iter(|| weekly_calorie_trend(black_box(logs), end));
        });
    }

    group.finish();
}

fn bench_store_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_mutations");

    for days in [7_u64, 365] {
        let store = populated_store(days, 2);
        group.bench_with_input(BenchmarkId::new("add_then_remove", days), &store, |b, store| {
            b.iter(|| {
                store.add_food(END, MealType::Dinner, sample_food(9_999));
                store.remove_food(END, MealType::Dinner, 2)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_daily_totals,
    bench_weekly_trend,
    bench_store_mutations
);
criterion_main!(benches);
