// ABOUTME: Observable state container with copy-on-write snapshots and change listeners
// ABOUTME: Readers get Arc snapshots; writers swap in a new snapshot and notify subscribers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared state with change notification
//!
//! The container owns one immutable snapshot behind an `Arc`. A write builds
//! the next snapshot from the current one and swaps it in, so subscribers
//! receive both the previous and the new snapshot and can compare sub-trees
//! with `Arc::ptr_eq` instead of deep equality.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Listener invoked with `(previous, current)` after every committed write
pub type Listener<S> = Arc<dyn Fn(&Arc<S>, &Arc<S>) + Send + Sync>;

/// Handle returned by [`StateContainer::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observable copy-on-write state
pub struct StateContainer<S> {
    state: RwLock<Arc<S>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<S>)>>,
    next_id: AtomicU64,
}

impl<S> StateContainer<S> {
    /// Create a container holding `initial`
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(Arc::new(initial)),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Latest committed snapshot
    #[must_use]
    pub fn get(&self) -> Arc<S> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the state wholesale
    pub fn set(&self, next: S) {
        self.update(|_| Some(next));
    }

    /// Derive the next state from the current one.
    ///
    /// `f` runs while the write lock is held, so concurrent updates apply in
    /// order. Returning `None` leaves the state untouched and notifies nobody.
    /// Returns the newly committed snapshot, if any.
    pub fn update<F>(&self, f: F) -> Option<Arc<S>>
    where
        F: FnOnce(&S) -> Option<S>,
    {
        let (previous, current) = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = Arc::new(f(&guard)?);
            let previous = std::mem::replace(&mut *guard, Arc::clone(&next));
            (previous, next)
        };
        self.notify(&previous, &current);
        Some(current)
    }

    /// Register a listener for committed writes
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<S>, &Arc<S>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Call listeners outside of any lock so they may read or write the
    /// container themselves
    fn notify(&self, previous: &Arc<S>, current: &Arc<S>) {
        let listeners: Vec<Listener<S>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(previous, current);
        }
    }
}

impl<S: Default> Default for StateContainer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for StateContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateContainer")
            .field("state", &self.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
