// ABOUTME: Fixed daily nutrient targets used by progress indicators
// ABOUTME: Static constants only; targets are not personalized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily calorie target (kcal)
pub const DAILY_CALORIE_TARGET: f64 = 2500.0;

/// Daily protein target (grams)
pub const DAILY_PROTEIN_TARGET_G: f64 = 129.0;

/// Daily fat target (grams)
pub const DAILY_FAT_TARGET_G: f64 = 70.0;

/// Daily carbohydrate target (grams)
pub const DAILY_CARBS_TARGET_G: f64 = 300.0;
