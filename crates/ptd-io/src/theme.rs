//! System color-scheme detection.
//!
//! [`ThemeMode::Auto`](ptd_workflow::ThemeMode::Auto) follows the
//! operating system's `prefers-color-scheme`. This module reads the
//! current preference, notifies a callback when it changes, and puts
//! the active theme on the document root so `<html>` and `<body>` are
//! styled along with the app.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::BrowserError;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the system currently prefers a dark color scheme.
///
/// Returns `false` outside a browser or when media queries are
/// unsupported.
#[must_use]
pub fn system_prefers_dark() -> bool {
    dark_query().is_some_and(|mql| mql.matches())
}

fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Keeps a `change` listener registered on the dark-scheme media query.
///
/// The listener is removed when this value is dropped.
pub struct SystemThemeWatcher {
    query: web_sys::MediaQueryList,
    listener: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        let _ = self.query.remove_event_listener_with_callback(
            "change",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}

/// Call `on_change(prefers_dark)` whenever the system preference flips.
///
/// # Errors
///
/// Returns [`BrowserError::JsError`] if there is no window, media
/// queries are unsupported, or the listener cannot be registered.
pub fn watch_system_preference(
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<SystemThemeWatcher, BrowserError> {
    let query = dark_query()
        .ok_or_else(|| BrowserError::JsError("matchMedia unavailable".into()))?;

    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            tracing::debug!(prefers_dark = event.matches(), "system color scheme changed");
            on_change(event.matches());
        },
    );
    query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;

    Ok(SystemThemeWatcher { query, listener })
}

/// Set each `(name, value)` attribute on the document element.
///
/// # Errors
///
/// Returns [`BrowserError::JsError`] if there is no document or an
/// attribute cannot be set.
pub fn apply_document_attributes(attributes: &[(&str, &str)]) -> Result<(), BrowserError> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| BrowserError::JsError("no document element".into()))?;
    for &(name, value) in attributes {
        root.set_attribute(name, value)?;
    }
    Ok(())
}
