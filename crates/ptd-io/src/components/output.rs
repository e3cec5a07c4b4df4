//! Output panel with the download link.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use ptd_workflow::OutputArtifact;

/// Props for the [`OutputPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct OutputPanelProps {
    /// The revealed artifact. `None` hides the panel.
    artifact: Option<OutputArtifact>,
}

/// Download affordance shown once a run has been revealed.
#[component]
pub fn OutputPanel(props: OutputPanelProps) -> Element {
    let Some(artifact) = props.artifact else {
        return rsx! {};
    };

    rsx! {
        section { id: "outputSection", class: "output-section",
            h3 { class: "output-title", "Your PTD is ready" }
            a {
                id: "downloadLink",
                class: "download-link",
                href: "{artifact.href}",
                "download": "{artifact.file_name}",
                Icon { width: 18, height: 18, icon: LdDownload }
                span { "Download {artifact.file_name}" }
            }
        }
    }
}
