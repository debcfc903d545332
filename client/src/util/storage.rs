//! Key-value slot persistence backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores read and write whole JSON snapshots through [`KvStore`], so the
//! catalog and cart logic runs unchanged in the browser ([`BrowserStorage`])
//! and in native tests ([`MemoryStorage`]).
//!
//! TRADE-OFFS
//! ==========
//! Storage problems are low-severity: unreadable slots load as empty and the
//! helpers log a warning instead of surfacing anything to the user. Callers
//! that seed a slot use [`read_slot`] so a malformed snapshot is never
//! mistaken for a missing one.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("serialize slot {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("write slot {key}: {message}")]
    Write { key: String, message: String },
}

/// String-valued key-value backend.
pub trait KvStore {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or rejects the write
    /// (for example when the browser quota is exhausted).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Reads see nothing and writes are dropped outside
/// the `hydrate` build, which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KvStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// In-process backend; clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), value.to_owned());
        }
        self
    }
}

impl KvStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Unavailable)?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// What a slot held when read.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// Nothing stored, or the backend could not be read.
    Missing,
    /// Present but not valid JSON for the requested type.
    Malformed,
    Value(T),
}

impl<T> Slot<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Malformed => None,
        }
    }
}

/// Read and decode the JSON value stored under `key`.
pub fn read_slot<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Slot<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Slot::Missing,
        Err(e) => {
            leptos::logging::warn!("storage read failed: key={key} error={e}");
            return Slot::Missing;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Slot::Value(value),
        Err(e) => {
            leptos::logging::warn!("malformed slot: key={key} error={e}");
            Slot::Malformed
        }
    }
}

/// Load a JSON value stored under `key`.
///
/// Missing, unreadable and malformed slots all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    read_slot(store, key).into_value()
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the backend rejects the write.
pub fn save_json<T: Serialize>(store: &impl KvStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    store.set_item(key, &raw)
}
