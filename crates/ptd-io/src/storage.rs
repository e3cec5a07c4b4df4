//! `localStorage`-backed preference store.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target). When storage is unavailable
//! (private browsing, disabled cookies) reads return `None` and writes
//! fail with [`SettingsError::Storage`], so the app falls back to
//! default preferences for the session.

use ptd_workflow::{SettingsError, SettingsStore};

use crate::error::BrowserError;

/// Preferences persisted in `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the page's local storage.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl SettingsStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| BrowserError::JsError("localStorage unavailable".into()))?;
        storage.set_item(key, value).map_err(BrowserError::from)?;
        Ok(())
    }
}
