//! String-keyed durable storage backing the session store. The browser build
//! uses `window.localStorage`; native builds and tests use an in-memory map
//! that is shared between handles, so a second store opened on the same map
//! behaves like a page reload.

use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

/// Key holding the JSON-encoded session record.
pub const AUTH_KEY: &str = "auth";
/// Secondary key holding the raw token.
pub const AUTHORIZATION_KEY: &str = "Authorization";
/// Secondary key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "User";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode session: {0}")]
    Encode(String),
}

/// Minimal key/value contract of `window.localStorage`.
pub trait DurableStorage {
    /// Returns the stored string, or `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage; clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` wrapper.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// Opens local storage; private browsing modes may deny it, in which case
    /// reads return nothing and writes fail with `Unavailable`.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable; the session will not survive reloads");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl DurableStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{DurableStorage, MemoryStorage};

    impl MemoryStorage {
        fn is_empty(&self) -> bool {
            self.items.borrow().is_empty()
        }
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let reopened = storage.clone();

        assert!(storage.set_item("auth", "{}").is_ok());
        assert_eq!(reopened.get_item("auth").as_deref(), Some("{}"));

        assert!(reopened.remove_item("auth").is_ok());
        assert!(storage.is_empty());
    }

    #[test]
    fn removing_missing_key_is_not_an_error() {
        let storage = MemoryStorage::new();
        assert!(storage.remove_item("missing").is_ok());
        assert_eq!(storage.get_item("missing"), None);
    }
}
