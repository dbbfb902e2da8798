// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, daily targets and remote nutrition API defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single file.

/// Durable storage keys and persisted envelope versions
pub mod storage;
/// Fixed daily nutrient targets
pub mod targets;
/// Remote nutrition API defaults
pub mod food_api;

pub use storage::*;
pub use targets::*;
