//! # Selection State
//!
//! The session's [`SelectionStore`] behind `Arc<Mutex<T>>`.

use std::sync::{Arc, Mutex};

use sling_core::SelectionStore;

use crate::scheduler::lock;

/// Thread-safe wrapper for the selection store.
///
/// A write either fully succeeds or leaves the store untouched (the store
/// guarantees that), so a plain `Mutex` is enough.
#[derive(Debug, Clone)]
pub struct SelectionState {
    store: Arc<Mutex<SelectionStore>>,
}

impl SelectionState {
    pub fn new(store: SelectionStore) -> Self {
        SelectionState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = selection.with_store(|store| store.total_price());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SelectionStore) -> R,
    {
        let store = lock(&self.store);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SelectionStore) -> R,
    {
        let mut store = lock(&self.store);
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sling_core::Money;

    #[test]
    fn test_clones_share_one_store() {
        let state = SelectionState::new(SelectionStore::with_builtin_catalog().unwrap());
        let other = state.clone();

        other
            .with_store_mut(|store| store.select_strap_style("padded-orange").map(|_| ()))
            .unwrap();

        assert_eq!(state.with_store(|s| s.total_price()), Money::new(10200));
    }
}
