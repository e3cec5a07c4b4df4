//! ptd-workflow: Upload-and-generate workflow for the PTD generator (sans-IO).
//!
//! Tracks the two required input documents (Protocol and CRF), gates
//! generation on both being present, and models a generation run that
//! advances in ticks until it reaches 100% and reveals a static
//! download. Display preferences (theme mode, accent) live here too.
//!
//! This crate has **no browser dependencies**. Timers, storage, and
//! rendering live in `ptd-io`.

pub mod progress;
pub mod run;
pub mod settings;
pub mod slot;
pub mod types;
pub mod workflow;

pub use progress::{FixedStep, ProgressSource, SimulatedProgress};
pub use run::{GenerationRun, RunStatus, TickOutcome};
pub use settings::{
    Accent, MemoryStore, ResolvedTheme, SettingChange, Settings, SettingsError, SettingsStore,
    ThemeMode,
};
pub use slot::UploadSlot;
pub use types::{OutputArtifact, SelectedFile, SlotId, WorkflowConfig, WorkflowError};
pub use workflow::Workflow;
