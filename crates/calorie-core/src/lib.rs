// ABOUTME: Core types and constants for the calorie tracker
// ABOUTME: Foundation crate with error handling, nutrition models, normalization and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate providing the shared types of the calorie tracker. It does
//! no I/O, which keeps it cheap to depend on and quick to rebuild.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, daily targets and nutrition API defaults
//! - **models**: Foods, nutrients, meal types and date-keyed food logs
//! - **normalize**: Coercion of numeric or unit-suffixed nutrient values

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Food, Nutrients, `MealType`, `DayLog`, `FoodLogs`)
pub mod models;

/// Nutrient value normalization
pub mod normalize;
