//! Shared types for the PTD upload-and-generate workflow.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one of the two required input documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    /// The study protocol document.
    Protocol,
    /// The case report form document.
    Crf,
}

impl SlotId {
    /// Both slots, in display order.
    pub const ALL: [Self; 2] = [Self::Protocol, Self::Crf];

    /// Human-readable label ("Protocol", "CRF").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protocol => "Protocol",
            Self::Crf => "CRF",
        }
    }

    /// Lowercase identifier used for DOM ids and serialization.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Crf => "crf",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file the user picked or dropped into a slot.
///
/// Only the display name is kept. The workflow never reads file
/// contents, so no type, size, or content checks happen here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    name: String,
}

impl SelectedFile {
    /// Wrap a file display name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::EmptyFileName`] if `name` is empty. Any
    /// other name, including one made only of spaces, is kept as is.
    pub fn new(name: impl Into<String>) -> Result<Self, WorkflowError> {
        let name = name.into();
        if name.is_empty() {
            return Err(WorkflowError::EmptyFileName);
        }
        Ok(Self { name })
    }

    /// The file's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The static download reference exposed when a run completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputArtifact {
    /// Link target for the download affordance.
    pub href: String,
    /// Suggested file name for the browser's save dialog.
    pub file_name: String,
}

impl OutputArtifact {
    /// An artifact whose link target and file name are the same path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path).to_owned();
        Self {
            href: path.to_owned(),
            file_name,
        }
    }
}

impl Default for OutputArtifact {
    fn default() -> Self {
        Self::from_path(DEFAULT_ARTIFACT)
    }
}

/// Default artifact path served next to the application.
pub const DEFAULT_ARTIFACT: &str = "PTD_Template.xlsx";

/// Timing, increment, and output settings for a generation run.
///
/// Defaults tick every 220 ms with increments drawn from 6 to 23
/// percent, then wait 250 ms between reaching 100% and revealing the
/// download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Delay between progress ticks, in milliseconds.
    pub tick_interval_ms: u32,

    /// Delay between reaching 100% and revealing the output.
    pub settle_delay_ms: u32,

    /// Smallest simulated increment per tick (inclusive).
    ///
    /// Must be at least 1 so every run terminates.
    pub increment_min: u8,

    /// Largest simulated increment per tick (inclusive).
    ///
    /// Must be at least `increment_min` and at most 100.
    pub increment_max: u8,

    /// The download exposed once a run completes.
    pub artifact: OutputArtifact,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 220,
            settle_delay_ms: 250,
            increment_min: 6,
            increment_max: 23,
            artifact: OutputArtifact::default(),
        }
    }
}

impl WorkflowConfig {
    /// Check the increment range and artifact reference.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidConfig`] describing the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.increment_min == 0 {
            return Err(WorkflowError::InvalidConfig(
                "increment_min must be at least 1".into(),
            ));
        }
        if self.increment_min > self.increment_max {
            return Err(WorkflowError::InvalidConfig(format!(
                "increment_min ({}) exceeds increment_max ({})",
                self.increment_min, self.increment_max
            )));
        }
        if self.increment_max > 100 {
            return Err(WorkflowError::InvalidConfig(format!(
                "increment_max ({}) exceeds 100",
                self.increment_max
            )));
        }
        if self.artifact.href.trim().is_empty() || self.artifact.file_name.trim().is_empty() {
            return Err(WorkflowError::InvalidConfig(
                "artifact reference must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Errors produced by the upload-and-generate workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// A selected file had no display name.
    #[error("selected file has an empty name")]
    EmptyFileName,

    /// Generation was requested before both documents were provided.
    #[error("Please upload both Protocol and CRF documents.")]
    MissingInputs(Vec<SlotId>),

    /// Generation was requested while a run is still in progress.
    #[error("a generation run is already in progress")]
    AlreadyRunning,

    /// Workflow configuration is invalid.
    #[error("invalid workflow configuration: {0}")]
    InvalidConfig(String),
}
