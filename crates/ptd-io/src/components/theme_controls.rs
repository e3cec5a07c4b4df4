//! Display mode segmented control and accent swatches.

use dioxus::prelude::*;
use ptd_workflow::{Accent, SettingChange, Settings, ThemeMode};

/// Props for the [`ThemeControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ThemeControlsProps {
    /// Current preferences.
    settings: Settings,
    /// Called with the single preference the user changed.
    on_change: EventHandler<SettingChange>,
}

/// Auto/Light/Dark buttons followed by one swatch per accent.
#[component]
pub fn ThemeControls(props: ThemeControlsProps) -> Element {
    let current = props.settings;

    rsx! {
        div { class: "theme-controls",
            div { class: "theme-segment", role: "tablist", aria_label: "Theme",
                for mode in ThemeMode::ALL {
                    button {
                        key: "{mode}",
                        class: if mode == current.mode { "seg active" } else { "seg" },
                        r#type: "button",
                        role: "tab",
                        "data-mode": mode.as_str(),
                        "aria-selected": if mode == current.mode { "true" } else { "false" },
                        onclick: move |_| props.on_change.call(SettingChange::Mode(mode)),
                        "{mode.label()}"
                    }
                }
            }

            div { class: "accent-swatches", role: "radiogroup", aria_label: "Accent",
                for accent in Accent::ALL {
                    {render_swatch(accent, accent == current.accent, props.on_change)}
                }
            }
        }
    }
}

/// Render a single accent swatch.
fn render_swatch(accent: Accent, selected: bool, on_change: EventHandler<SettingChange>) -> Element {
    let color = accent.swatch();
    let label = accent.label();

    rsx! {
        button {
            class: if selected { "swatch selected" } else { "swatch" },
            r#type: "button",
            role: "radio",
            title: "{label}",
            aria_label: "{label}",
            "data-accent": accent.as_str(),
            "aria-checked": if selected { "true" } else { "false" },
            style: "background: {color}",
            onclick: move |_| on_change.call(SettingChange::Accent(accent)),
        }
    }
}
