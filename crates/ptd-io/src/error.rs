//! Errors from browser API calls.

use ptd_workflow::SettingsError;
use wasm_bindgen::JsValue;

/// A browser API call failed or a required global is missing.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<BrowserError> for SettingsError {
    fn from(value: BrowserError) -> Self {
        Self::Storage(value.to_string())
    }
}
