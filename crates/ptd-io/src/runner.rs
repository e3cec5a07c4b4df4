//! Timer-driven generation driver.
//!
//! Runs on the browser event loop: sleeps one tick interval, applies a
//! tick, and repeats until the run is Done. After the settle delay it
//! reveals the output. Ticks are strictly sequential because each one
//! is awaited before the next timer is scheduled.

use std::future::Future;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use ptd_workflow::{OutputArtifact, ProgressSource, TickOutcome, Workflow, WorkflowConfig};

/// Somewhere the driver can reach the workflow between awaits.
pub trait WorkflowCell {
    /// Run `f` with mutable access to the workflow.
    fn with_mut<T>(&mut self, f: impl FnOnce(&mut Workflow) -> T) -> T;
}

impl WorkflowCell for Signal<Workflow> {
    fn with_mut<T>(&mut self, f: impl FnOnce(&mut Workflow) -> T) -> T {
        f(&mut *self.write())
    }
}

impl WorkflowCell for &mut Workflow {
    fn with_mut<T>(&mut self, f: impl FnOnce(&mut Workflow) -> T) -> T {
        f(self)
    }
}

/// Drive the workflow's current run to completion and reveal the output.
///
/// Call after [`Workflow::start_generation`] succeeds. Returns early
/// without revealing if the run stops being Running between ticks.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn drive_generation(workflow: Signal<Workflow>, source: impl ProgressSource) {
    let config = workflow.peek().config().clone();
    drive(workflow, source, &config, TimeoutFuture::new).await;
}

/// Tick `cell` until Done, sleep the settle delay, then reveal.
///
/// `sleep(ms)` is awaited before every tick and once before the
/// reveal. Returns the revealed artifact, or `None` if the run was not
/// Running or its output had already been revealed.
#[allow(clippy::future_not_send)]
pub async fn drive<C, F, Fut>(
    mut cell: C,
    mut source: impl ProgressSource,
    config: &WorkflowConfig,
    mut sleep: F,
) -> Option<OutputArtifact>
where
    C: WorkflowCell,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        sleep(config.tick_interval_ms).await;
        match cell.with_mut(|wf| wf.tick(&mut source)) {
            TickOutcome::Advanced(_) => {}
            TickOutcome::Done => break,
            TickOutcome::Inactive => {
                tracing::warn!("generation driver found no running run; stopping");
                return None;
            }
        }
    }

    sleep(config.settle_delay_ms).await;
    let revealed = cell.with_mut(Workflow::reveal);
    if revealed.is_none() {
        tracing::warn!("generation finished but output was already revealed");
    }
    revealed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::FutureExt;
    use ptd_workflow::{FixedStep, RunStatus, SelectedFile, SlotId};

    use super::*;

    fn ready_workflow() -> Workflow {
        let mut wf = Workflow::default();
        wf.select_file(SlotId::Protocol, SelectedFile::new("a.pdf").unwrap());
        wf.select_file(SlotId::Crf, SelectedFile::new("b.pdf").unwrap());
        wf
    }

    #[test]
    fn reveals_after_settle_delay() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        let config = wf.config().clone();
        let mut delays = Vec::new();

        let revealed = drive(&mut wf, FixedStep(25), &config, |ms| {
            delays.push(ms);
            std::future::ready(())
        })
        .now_or_never()
        .unwrap();

        assert_eq!(revealed, Some(config.artifact.clone()));
        assert_eq!(delays, vec![220, 220, 220, 220, 250]);
        assert_eq!(wf.status(), RunStatus::Idle);
        assert_eq!(wf.run().progress(), 100);
        assert_eq!(wf.output(), Some(&config.artifact));
    }

    #[test]
    fn output_stays_hidden_until_settle_sleep_finishes() {
        let mut wf = ready_workflow();
        wf.start_generation().unwrap();
        let config = wf.config().clone();
        let mut sleeps = 0;

        // Never finish the settle sleep, so the driver stays parked there.
        let pending = drive(&mut wf, FixedStep(50), &config, |ms| {
            sleeps += 1;
            let settle = ms == config.settle_delay_ms;
            async move {
                if settle {
                    std::future::pending::<()>().await;
                }
            }
        })
        .now_or_never();

        assert!(pending.is_none());
        assert_eq!(sleeps, 3);
        assert_eq!(wf.status(), RunStatus::Done);
        assert!(wf.output().is_none());
        assert!(!wf.can_generate());
    }

    #[test]
    fn stops_without_reveal_when_nothing_is_running() {
        let mut wf = ready_workflow();
        let config = wf.config().clone();
        let mut delays = Vec::new();

        let revealed = drive(&mut wf, FixedStep(25), &config, |ms| {
            delays.push(ms);
            std::future::ready(())
        })
        .now_or_never()
        .unwrap();

        assert_eq!(revealed, None);
        assert_eq!(delays, vec![220]);
        assert_eq!(wf.status(), RunStatus::Idle);
        assert!(wf.output().is_none());
    }
}
