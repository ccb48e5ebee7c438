//! Persistent Key/Value Storage
//!
//! Narrow view of `window.localStorage` used by the token cache purge.

use crate::error::{AppError, Result};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// All keys currently stored
    fn keys(&self) -> Result<Vec<String>>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// `window.localStorage`, resolved on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        window
            .local_storage()
            .map_err(AppError::storage)?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(AppError::storage)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let storage = self.storage()?;
        let len = storage.length().map_err(AppError::storage)?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = storage.key(i).map_err(AppError::storage)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(AppError::storage)
    }
}
