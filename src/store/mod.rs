// ABOUTME: Client-side stores for food logs and the selected date
// ABOUTME: Observable copy-on-write containers persisted to durable key-value storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Stores
//!
//! Each store exclusively owns its state. Reads always observe the latest
//! committed snapshot; mutations go through the store's operations and apply
//! in call order. Before a mutation returns, storage holds a snapshot at least
//! as new as that mutation, and writes are serialized per store so the last
//! write always carries the latest state.

/// Observable copy-on-write state container
pub mod container;
/// Food log store
pub mod food_log;
/// Shared persistence discipline
pub mod persist;
/// Selected date store
pub mod selected_date;

pub use container::{StateContainer, SubscriptionId};
pub use food_log::FoodLogStore;
pub use persist::Persistence;
pub use selected_date::SelectedDateStore;
