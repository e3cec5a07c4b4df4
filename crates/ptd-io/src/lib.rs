//! ptd-io: Browser I/O and Dioxus component library.
//!
//! Handles file intake (picker and drag-and-drop), the timer-driven
//! generation driver, `localStorage` preferences, system color-scheme
//! detection, and provides the UI components for the PTD generator
//! web application.

pub mod components;
pub mod error;
pub mod runner;
pub mod storage;
pub mod theme;

pub use components::{Dropzone, GeneratePanel, OutputPanel, ThemeControls};
pub use error::BrowserError;
pub use storage::LocalStorage;
