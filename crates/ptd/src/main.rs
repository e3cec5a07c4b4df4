use std::rc::Rc;

use dioxus::prelude::*;
use ptd_io::storage::LocalStorage;
use ptd_io::{Dropzone, GeneratePanel, OutputPanel, ThemeControls, runner, theme};
use ptd_workflow::{SettingChange, Settings, SimulatedProgress, SlotId, Workflow};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the workflow and preference state via Dioxus signals and wires
/// together the theme controls, the two dropzones, the generate panel,
/// and the output panel.
fn app() -> Element {
    // --- Application state ---
    let mut workflow = use_signal(Workflow::default);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut store = use_signal(LocalStorage::open);
    let mut settings = use_signal(|| Settings::load(&*store.peek()));
    let mut system_dark = use_signal(theme::system_prefers_dark);

    // Re-resolve Auto mode when the OS color scheme flips. The watcher
    // lives as long as the root component.
    let _watcher = use_hook(|| {
        let watcher = theme::watch_system_preference(move |dark| system_dark.set(dark));
        if let Err(ref e) = watcher {
            tracing::warn!(error = %e, "not watching system color scheme");
        }
        Rc::new(watcher.ok())
    });

    // --- Document theme effect ---
    // Re-runs whenever the settings or the system preference change.
    use_effect(move || {
        let attributes = settings().document_attributes(system_dark());
        if let Err(e) = theme::apply_document_attributes(&attributes) {
            tracing::warn!(error = %e, "theme not applied to document");
        }
    });

    // --- Preference handler ---
    let on_settings_change = move |change: SettingChange| {
        let result = settings.write().update(change, &mut *store.write());
        if let Err(e) = result {
            tracing::warn!(error = %e, "preference not persisted");
        }
    };

    // --- Generate handler ---
    let on_generate = move |()| {
        let source = match SimulatedProgress::from_entropy(workflow.peek().config()) {
            Ok(source) => source,
            Err(e) => {
                notice.set(Some(e.to_string()));
                return;
            }
        };
        let started = workflow.write().start_generation();
        match started {
            Ok(()) => {
                notice.set(None);
                spawn(runner::drive_generation(workflow, source));
            }
            Err(e) => notice.set(Some(e.to_string())),
        }
    };

    // --- Derived view state ---
    let current = settings();
    let wf = workflow.read();
    let can_generate = wf.can_generate();
    let status = wf.status();
    let progress = wf.run().progress();
    let show_progress = wf.run().ticks() > 0 || wf.run().is_running() || wf.output().is_some();
    let artifact = wf.output().cloned();
    let files = SlotId::ALL.map(|slot| wf.slot(slot).file().cloned());
    drop(wf);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app",
            header { class: "app-header",
                div {
                    h1 { class: "title-brand", "PTD Generator" }
                    p { class: "subtitle",
                        "Protocol-to-CRF Tool Design from your Protocol and CRF documents"
                    }
                }
                ThemeControls {
                    settings: current,
                    on_change: on_settings_change,
                }
            }

            main { class: "app-main",
                div { class: "dropzones",
                    for (slot, file) in SlotId::ALL.into_iter().zip(files) {
                        Dropzone {
                            key: "{slot.key()}",
                            slot,
                            file,
                            on_select: move |file| workflow.write().select_file(slot, file),
                            on_remove: move |slot| {
                                workflow.write().remove_file(slot);
                            },
                        }
                    }
                }

                GeneratePanel {
                    can_generate,
                    status,
                    progress,
                    show_progress,
                    notice: notice(),
                    on_generate,
                }

                OutputPanel { artifact }
            }
        }
    }
}
