//! In-memory stock entry store
//!
//! The append-only entry history, owned by the application state and injected
//! into services rather than reached ambiently. Entries are never mutated or
//! deleted; submissions are prepended so the newest batch leads the history.

use std::sync::{Arc, RwLock};

use shared::models::StockEntry;

/// Shared handle to the append-only entry collection
#[derive(Clone, Default)]
pub struct EntryStore {
    inner: Arc<RwLock<Vec<StockEntry>>>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with seed entries
    pub fn seeded(entries: Vec<StockEntry>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Prepend a batch to the history, preserving the batch's internal order
    pub fn append(&self, mut batch: Vec<StockEntry>) {
        let mut entries = self.inner.write().unwrap_or_else(|e| e.into_inner());
        batch.extend(entries.drain(..));
        *entries = batch;
    }

    /// Snapshot of all entries, newest first
    pub fn list(&self) -> Vec<StockEntry> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn entry(id: &str) -> StockEntry {
        StockEntry {
            id: id.to_string(),
            outlet_id: "ot-1".to_string(),
            product_id: "p1".to_string(),
            quantity: Decimal::from(10),
            amount: Decimal::from(100),
            entry_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            entered_by: "u-2".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_prepends_batches_in_order() {
        let store = EntryStore::seeded(vec![entry("s-1")]);
        store.append(vec![entry("s-2"), entry("s-3")]);

        let ids: Vec<String> = store.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["s-2", "s-3", "s-1"]);
    }

    #[test]
    fn test_list_returns_a_snapshot() {
        let store = EntryStore::new();
        let snapshot = store.list();
        store.append(vec![entry("s-1")]);

        assert!(snapshot.is_empty());
        assert_eq!(store.len(), 1);
    }
}
