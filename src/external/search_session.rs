// ABOUTME: Debounced, latest-wins food search session over a FoodLookup
// ABOUTME: Superseded searches resolve to Superseded instead of applying stale results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Search Session
//!
//! Models the search box: each input starts a search that first waits out
//! the debounce interval. Any newer input (or [`SearchSession::cancel`])
//! supersedes it, both while it waits and while its request is in flight, so
//! results are never applied out of order.

use super::food_api_client::{FoodLookup, FoodSearchResult};
use crate::config::SearchConfig;
use calorie_core::errors::AppResult;
use calorie_core::models::Food;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Result of one search call
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search was still current when it finished
    Results(Vec<FoodSearchResult>),
    /// A newer search or a cancel arrived first; discard
    Superseded,
}

impl SearchOutcome {
    /// Results when current, `None` when superseded
    #[must_use]
    pub fn into_results(self) -> Option<Vec<FoodSearchResult>> {
        match self {
            Self::Results(results) => Some(results),
            Self::Superseded => None,
        }
    }

    /// Whether the search was superseded
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// Debounced latest-wins search over a [`FoodLookup`]
pub struct SearchSession {
    lookup: Arc<dyn FoodLookup>,
    debounce: Duration,
    generation: AtomicU64,
}

impl SearchSession {
    /// Session with the configured debounce interval
    #[must_use]
    pub fn new(lookup: Arc<dyn FoodLookup>, config: &SearchConfig) -> Self {
        Self::with_debounce(lookup, config.debounce())
    }

    /// Session with an explicit debounce interval
    #[must_use]
    pub fn with_debounce(lookup: Arc<dyn FoodLookup>, debounce: Duration) -> Self {
        Self {
            lookup,
            debounce,
            generation: AtomicU64::new(0),
        }
    }

    /// Debounce interval
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Search for `query` once input has been quiet for the debounce interval.
    ///
    /// A blank query clears the results without contacting the API.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures, but only for a search that is still
    /// current; a superseded search reports [`SearchOutcome::Superseded`]
    /// whatever happened to its request.
    pub async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(generation) {
            debug!(query, "search superseded during debounce");
            return Ok(SearchOutcome::Superseded);
        }

        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Results(Vec::new()));
        }

        let result = self.lookup.search_food(query).await;
        if !self.is_current(generation) {
            debug!(query, "search response discarded");
            return Ok(SearchOutcome::Superseded);
        }

        result.map(SearchOutcome::Results)
    }

    /// Supersede any pending search
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Fetch details for a chosen hit and build the food to log.
    ///
    /// Also supersedes pending searches, as choosing a result clears the box.
    ///
    /// # Errors
    ///
    /// Propagates the detail lookup failure.
    pub async fn select(&self, item: &FoodSearchResult) -> AppResult<Food> {
        self.cancel();
        let details = self.lookup.get_food_details(item.id).await?;
        Ok(details.into_food(&item.image))
    }
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("debounce", &self.debounce)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
