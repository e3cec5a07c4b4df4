//! Dioxus UI components for the PTD generator.
//!
//! Provides the per-document dropzones, the generate panel with its
//! progress bar, the download panel, and the theme/accent controls.

mod dropzone;
mod generate;
mod output;
mod theme_controls;

pub use dropzone::Dropzone;
pub use generate::GeneratePanel;
pub use output::OutputPanel;
pub use theme_controls::ThemeControls;
