//! Generate button, progress bar, and the rejection notice.

use dioxus::prelude::*;
use ptd_workflow::RunStatus;

/// Props for the [`GeneratePanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct GeneratePanelProps {
    /// Whether the Generate button is enabled.
    can_generate: bool,
    /// Status of the current (or most recent) run.
    status: RunStatus,
    /// Progress of the current (or most recent) run, 0..=100.
    progress: u8,
    /// Whether any run has started since the page loaded.
    show_progress: bool,
    /// Blocking notice from a rejected generate request.
    notice: Option<String>,
    /// Called when the Generate button is pressed.
    on_generate: EventHandler<()>,
}

/// The Generate action and its progress display.
#[component]
pub fn GeneratePanel(props: GeneratePanelProps) -> Element {
    let progress = props.progress;
    let status_label = match props.status {
        RunStatus::Running => "Processing…",
        RunStatus::Done | RunStatus::Idle => "Done",
    };

    rsx! {
        div { class: "generate-panel",
            button {
                id: "generateButton",
                class: "generate-button",
                r#type: "button",
                disabled: !props.can_generate,
                onclick: move |_| props.on_generate.call(()),
                if props.status == RunStatus::Running {
                    "Generating…"
                } else {
                    "Generate PTD"
                }
            }

            if let Some(ref notice) = props.notice {
                div { class: "notice", role: "alert",
                    p { class: "error-text", "{notice}" }
                }
            }

            if props.show_progress {
                div { class: "progress-container",
                    div {
                        class: "progress",
                        role: "progressbar",
                        "aria-valuemin": "0",
                        "aria-valuemax": "100",
                        "aria-valuenow": "{progress}",
                        div {
                            class: "progress-bar",
                            style: "width: {progress}%",
                        }
                    }
                    div { class: "progress-meta",
                        span { class: "progress-label", "{status_label}" }
                        span { class: "progress-value", "{progress}%" }
                    }
                }
            }
        }
    }
}
