//! Persisted theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only persisted state in the site is one `localStorage` entry. Access
//! can throw (privacy mode, disabled storage, quota), so every browser call is
//! mapped into [`StorageError`] and the caller decides how to degrade.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` build there is no browser storage; the store reports
//! no value and accepts writes as no-ops so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Failure reading or writing the persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("reading stored theme failed: {0}")]
    Read(String),
    #[error("writing stored theme failed: {0}")]
    Write(String),
}

/// Key-value access to the persisted theme value.
pub trait PreferenceStore {
    /// Load the raw stored value, `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `value` under [`THEME_STORAGE_KEY`].
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(THEME_STORAGE_KEY)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(THEME_STORAGE_KEY, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }
}
