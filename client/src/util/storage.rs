//! Key/value persistence adapters for client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only talks to the [`SessionStorage`] trait. The browser
//! build plugs in `localStorage`; tests and the server render use the
//! in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Raw string storage keyed by record name.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, raw: &str);
}

/// `window.localStorage`. No-ops outside the browser build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, raw).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
        }
    }
}

/// Shared in-memory map. Clones see the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, e.g. to simulate a value left by a previous page load.
    #[must_use]
    pub fn with_record(self, key: &str, raw: &str) -> Self {
        self.write(key, raw);
        self
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.records.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.to_owned(), raw.to_owned());
        }
    }
}
