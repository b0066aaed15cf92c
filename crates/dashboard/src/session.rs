//! Persisted client-side storage.

use std::cell::RefCell;
use std::collections::HashMap;

/// Key/value storage that outlives the page (local and session storage).
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;

    /// Clear local and session state alike.
    fn clear_all(&self);
}

/// Store kept in memory, for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }

    pub fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn clear_all(&self) {
        self.values.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with("walletAddress", "0xabc");
        assert_eq!(store.read("walletAddress").as_deref(), Some("0xabc"));
        assert_eq!(store.read("missing"), None);

        store.clear_all();
        assert!(store.is_empty());
    }
}
