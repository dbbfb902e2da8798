// ABOUTME: Unified error handling re-exported from the foundation crate
// ABOUTME: AppError, ErrorCode and AppResult shared by every tracker module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use calorie_core::errors::{AppError, AppResult, ErrorCode};
