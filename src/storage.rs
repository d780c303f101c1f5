//! Key-Value Storage
//!
//! `localStorage` behind a trait so session and chat persistence can be
//! exercised without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";
pub const SELECTED_CHILD_KEY: &str = "selectedChild";
pub const AI_MESSAGES_KEY: &str = "aiMessages";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// `window.localStorage`. Every call is a no-op when storage is unavailable
/// (private browsing, sandboxed iframe).
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read and decode a JSON value. Corrupt entries are dropped and read as absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {} entry: {}", key, e);
            store.remove(key);
            None
        }
    }
}

pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::error!("failed to encode {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStorage::new();
        save_json(&store, "numbers", &vec![1, 2, 3]);
        assert_eq!(load_json::<Vec<i32>>(&store, "numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_entry_is_removed() {
        let store = MemoryStorage::new();
        store.set(USER_KEY, "{not json");
        assert_eq!(load_json::<serde_json::Value>(&store, USER_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }
}
