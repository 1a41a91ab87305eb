use log::{debug, info, warn};
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;
use crate::signup::email::normalize;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("cannot store an empty email address")]
    EmptyEmail,
    #[error("signup storage is unavailable: {0}")]
    PersistenceUnavailable(String),
}

/// Result of an append: the full list after the call and whether it grew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appended {
    pub signups: Vec<String>,
    pub inserted: bool,
}

/// Persistence boundary for collected signups.
///
/// Backends only move the serialized list in and out; decoding, normalization
/// and deduplication are shared by every backend through `load` and `append`.
pub trait SignupStore {
    /// Raw serialized list, `None` when nothing has been stored yet or the
    /// backend can't be read.
    fn read_raw(&self) -> Option<String>;

    fn write_raw(&self, raw: &str) -> Result<(), StoreError>;

    /// Never fails: missing or corrupt state reads as an empty list.
    fn load(&self) -> Vec<String> {
        match self.read_raw() {
            Some(raw) => decode(&raw),
            None => Vec::new(),
        }
    }

    fn append(&self, email: &str) -> Result<Appended, StoreError> {
        let email = normalize(email);
        if email.is_empty() {
            return Err(StoreError::EmptyEmail);
        }

        let mut signups = self.load();
        if signups.iter().any(|existing| normalize(existing) == email) {
            debug!("{} already signed up, list left as is", email);
            return Ok(Appended { signups, inserted: false });
        }

        signups.push(email);
        let raw = serde_json::to_string(&signups)
            .map_err(|e| StoreError::PersistenceUnavailable(e.to_string()))?;
        self.write_raw(&raw)?;
        info!("Stored new signup, {} total", signups.len());
        Ok(Appended { signups, inserted: true })
    }
}

fn decode(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(signups) => signups,
        Err(e) => {
            warn!("Ignoring unreadable signup list: {}", e);
            Vec::new()
        }
    }
}

/// Signups kept in the browser's `window.localStorage`.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = window()
            .ok_or_else(|| StoreError::PersistenceUnavailable("no window object".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::PersistenceUnavailable(
                "localStorage is disabled".to_string(),
            )),
            Err(e) => Err(StoreError::PersistenceUnavailable(format!("{:?}", e))),
        }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(config::STORAGE_KEY)
    }
}

impl SignupStore for LocalStorageStore {
    fn read_raw(&self) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    fn write_raw(&self, raw: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|e| {
                // QuotaExceededError lands here as a DOMException
                let reason = e.as_string().unwrap_or_else(|| format!("{:?}", e));
                StoreError::PersistenceUnavailable(reason)
            })
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
