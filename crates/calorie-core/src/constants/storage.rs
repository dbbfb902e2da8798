// ABOUTME: Durable storage keys used by the food log and selected date stores
// ABOUTME: Keys and envelope version are part of the persisted format and must not change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage key holding the serialized food logs
pub const FOOD_STORE_KEY: &str = "food-store";

/// Storage key holding the serialized selected date
pub const DATE_STORE_KEY: &str = "date-storage";

/// Version written into every persisted envelope. No migrations exist, so a
/// different version on load is treated as unreadable data.
pub const PERSISTED_STATE_VERSION: u32 = 0;

/// Format of a date key (`YYYY-MM-DD`)
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Number of days covered by the calorie trend
pub const TREND_DAYS: u64 = 7;
