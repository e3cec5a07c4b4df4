//! The upload-and-generate workflow state machine.
//!
//! Owns the two [`UploadSlot`]s, the single [`GenerationRun`], and the
//! revealed [`OutputArtifact`]. Every operation is synchronous; the
//! caller decides when ticks happen (see `ptd_io::runner` for the
//! timer-driven driver).

use crate::progress::ProgressSource;
use crate::run::{GenerationRun, RunStatus, TickOutcome};
use crate::slot::UploadSlot;
use crate::types::{OutputArtifact, SelectedFile, SlotId, WorkflowConfig, WorkflowError};

/// State of the PTD upload-and-generate workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    protocol: UploadSlot,
    crf: UploadSlot,
    run: GenerationRun,
    output: Option<OutputArtifact>,
    config: WorkflowConfig,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::with_validated(WorkflowConfig::default())
    }
}

impl Workflow {
    /// Create a workflow with both slots empty and no run.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidConfig`] if `config` fails
    /// [`WorkflowConfig::validate`].
    pub fn new(config: WorkflowConfig) -> Result<Self, WorkflowError> {
        config.validate()?;
        Ok(Self::with_validated(config))
    }

    fn with_validated(config: WorkflowConfig) -> Self {
        Self {
            protocol: UploadSlot::new(SlotId::Protocol),
            crf: UploadSlot::new(SlotId::Crf),
            run: GenerationRun::default(),
            output: None,
            config,
        }
    }

    /// The configuration this workflow was created with.
    #[must_use]
    pub const fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Borrow a slot.
    #[must_use]
    pub const fn slot(&self, id: SlotId) -> &UploadSlot {
        match id {
            SlotId::Protocol => &self.protocol,
            SlotId::Crf => &self.crf,
        }
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut UploadSlot {
        match id {
            SlotId::Protocol => &mut self.protocol,
            SlotId::Crf => &mut self.crf,
        }
    }

    /// Put `file` into slot `id`, replacing any earlier selection.
    ///
    /// Does not touch an in-flight run.
    pub fn select_file(&mut self, id: SlotId, file: SelectedFile) {
        tracing::debug!(slot = id.key(), file = file.name(), "file selected");
        self.slot_mut(id).select(file);
        self.log_readiness();
    }

    /// Clear slot `id`, returning the file it held.
    ///
    /// Does not touch an in-flight run.
    pub fn remove_file(&mut self, id: SlotId) -> Option<SelectedFile> {
        let removed = self.slot_mut(id).clear();
        if removed.is_some() {
            tracing::debug!(slot = id.key(), "file removed");
            self.log_readiness();
        }
        removed
    }

    /// Whether both documents are present.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.protocol.is_selected() && self.crf.is_selected()
    }

    /// Slots that still need a file, in display order.
    #[must_use]
    pub fn missing_slots(&self) -> Vec<SlotId> {
        SlotId::ALL
            .into_iter()
            .filter(|&id| !self.slot(id).is_selected())
            .collect()
    }

    /// Whether the Generate action should be enabled.
    ///
    /// False from the moment a run starts until its output is revealed,
    /// even if both slots are filled.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.is_ready() && self.run.status() == RunStatus::Idle
    }

    /// The current (or most recent) run.
    #[must_use]
    pub const fn run(&self) -> &GenerationRun {
        &self.run
    }

    /// The revealed download, if the last run has finished.
    #[must_use]
    pub const fn output(&self) -> Option<&OutputArtifact> {
        self.output.as_ref()
    }

    /// Begin a new run at 0% and hide the previous output.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::AlreadyRunning`] while a run is in
    /// flight or awaiting its reveal, or [`WorkflowError::MissingInputs`]
    /// listing the empty slots when either document is absent.
    pub fn start_generation(&mut self) -> Result<(), WorkflowError> {
        if self.run.status() != RunStatus::Idle {
            return Err(WorkflowError::AlreadyRunning);
        }
        if !self.is_ready() {
            return Err(WorkflowError::MissingInputs(self.missing_slots()));
        }

        self.output = None;
        self.run.start();
        tracing::info!("generation started");
        Ok(())
    }

    /// Apply one progress tick from `source`.
    ///
    /// Returns [`TickOutcome::Done`] exactly once per run, on the tick
    /// that reaches 100%.
    pub fn tick(&mut self, source: &mut impl ProgressSource) -> TickOutcome {
        let outcome = self.run.tick(source);
        match outcome {
            TickOutcome::Advanced(progress) => {
                tracing::debug!(progress, "generation progress");
            }
            TickOutcome::Done => {
                tracing::info!(ticks = self.run.ticks(), "generation done");
            }
            TickOutcome::Inactive => {}
        }
        outcome
    }

    /// Expose the output artifact after a run reaches Done.
    ///
    /// Returns the artifact on the first call after Done and `None` at
    /// any other time.
    pub fn reveal(&mut self) -> Option<OutputArtifact> {
        if !self.run.settle() {
            return None;
        }
        let artifact = self.config.artifact.clone();
        tracing::info!(href = %artifact.href, "output revealed");
        self.output = Some(artifact.clone());
        Some(artifact)
    }

    /// Shorthand for the run's status.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.run.status()
    }

    fn log_readiness(&self) {
        tracing::debug!(
            ready = self.is_ready(),
            can_generate = self.can_generate(),
            "readiness recomputed"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::progress::FixedStep;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name).unwrap()
    }

    fn ready_workflow() -> Workflow {
        let mut wf = Workflow::default();
        wf.select_file(SlotId::Protocol, file("a.pdf"));
        wf.select_file(SlotId::Crf, file("b.pdf"));
        wf
    }

    #[test]
    fn starts_empty_and_not_ready() {
        let wf = Workflow::default();
        assert!(!wf.is_ready());
        assert!(!wf.can_generate());
        assert_eq!(wf.status(), RunStatus::Idle);
        assert!(wf.output().is_none());
        assert_eq!(wf.missing_slots(), vec![SlotId::Protocol, SlotId::Crf]);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = WorkflowConfig {
            increment_min: 0,
            ..WorkflowConfig::default()
        };
        assert!(matches!(
            Workflow::new(config),
            Err(WorkflowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn one_slot_is_not_enough() {
        let mut wf = Workflow::default();
        wf.select_file(SlotId::Protocol, file("a.pdf"));
        assert!(!wf.is_ready());
        assert_eq!(wf.missing_slots(), vec![SlotId::Crf]);
    }

    #[test]
    fn both_slots_enable_generate() {
        let wf = ready_workflow();
        assert!(wf.is_ready());
        assert!(wf.can_generate());
        assert!(wf.missing_slots().is_empty());
    }

    #[test]
    fn removal_disables_generate() {
        let mut wf = ready_workflow();
        assert_eq!(wf.remove_file(SlotId::Crf), Some(file("b.pdf")));
        assert!(!wf.can_generate());
        assert_eq!(wf.remove_file(SlotId::Crf), None);
    }

    #[test]
    fn replacement_keeps_readiness() {
        let mut wf = ready_workflow();
        wf.select_file(SlotId::Protocol, file("a2.pdf"));
        assert!(wf.is_ready());
        assert_eq!(
            wf.slot(SlotId::Protocol).file().map(SelectedFile::name),
            Some("a2.pdf")
        );
    }

    #[test]
    fn start_without_inputs_is_rejected() {
        let mut wf = Workflow::default();
        wf.select_file(SlotId::Crf, file("b.pdf"));
        assert_eq!(
            wf.start_generation(),
            Err(WorkflowError::MissingInputs(vec![SlotId::Protocol]))
        );
        assert_eq!(wf.status(), RunStatus::Idle);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        assert!(!wf.can_generate());
        assert_eq!(wf.start_generation(), Err(WorkflowError::AlreadyRunning));
    }

    #[test]
    fn full_run_reveals_artifact_once() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        assert_eq!(wf.run().progress(), 0);

        assert_eq!(wf.tick(&mut FixedStep(40)), TickOutcome::Advanced(40));
        assert_eq!(wf.tick(&mut FixedStep(40)), TickOutcome::Advanced(80));
        assert_eq!(wf.reveal(), None, "reveal before Done must not fire");
        assert_eq!(wf.tick(&mut FixedStep(40)), TickOutcome::Done);
        assert_eq!(wf.status(), RunStatus::Done);
        assert!(!wf.can_generate());
        assert_eq!(wf.start_generation(), Err(WorkflowError::AlreadyRunning));

        let artifact = wf.reveal().unwrap();
        assert_eq!(artifact.href, "PTD_Template.xlsx");
        assert_eq!(wf.output(), Some(&artifact));
        assert_eq!(wf.status(), RunStatus::Idle);
        assert!(wf.can_generate());
        assert_eq!(wf.reveal(), None);
    }

    #[test]
    fn restart_hides_previous_output() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        wf.tick(&mut FixedStep(100));
        wf.reveal();
        assert!(wf.output().is_some());

        wf.start_generation().unwrap();
        assert!(wf.output().is_none());
        assert_eq!(wf.run().progress(), 0);
    }

    #[test]
    fn removal_mid_run_does_not_stop_it() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        wf.tick(&mut FixedStep(30));
        wf.remove_file(SlotId::Protocol);

        assert_eq!(wf.status(), RunStatus::Running);
        assert_eq!(wf.tick(&mut FixedStep(80)), TickOutcome::Done);
        assert!(wf.reveal().is_some());
        assert!(!wf.can_generate());
        assert_eq!(
            wf.start_generation(),
            Err(WorkflowError::MissingInputs(vec![SlotId::Protocol]))
        );
    }
}
