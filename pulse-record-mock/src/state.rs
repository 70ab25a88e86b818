//! In-memory backend state

use serde_json::{Map, Value};
use shared::models::UserAccount;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Shared state for the mock backend.
///
/// Records are stored as raw JSON objects keyed by table name, the same
/// shape the wire carries, so handlers never need per-table model types.
pub struct MockState {
    /// Table name -> stored records
    pub tables: RwLock<HashMap<String, Vec<Map<String, Value>>>>,
    /// Session token -> logged-in user
    pub sessions: RwLock<HashMap<String, UserAccount>>,
    /// Recorded invite emails
    pub invites: RwLock<Vec<String>>,
    next_id: AtomicI64,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            invites: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocate the next record id
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let state = MockState::new();
        let first = state.next_id();
        let second = state.next_id();
        assert!(second > first);
    }
}
