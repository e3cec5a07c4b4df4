//! Document dropzone with drag-and-drop, file picker, and a removable chip.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdUpload, LdX};
use ptd_workflow::{SelectedFile, SlotId};
use wasm_bindgen::JsCast;

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// Which document this zone collects.
    slot: SlotId,
    /// The file currently held by the slot.
    file: Option<SelectedFile>,
    /// Called when a file is picked or dropped.
    on_select: EventHandler<SelectedFile>,
    /// Called when the chip's remove button is pressed.
    on_remove: EventHandler<SlotId>,
}

/// A drag-and-drop zone backed by a hidden file input.
///
/// Click, Enter, or Space opens the picker. Any file is accepted; only
/// its name is forwarded. While a file is held, its name replaces the
/// slot label and a chip with a remove button is shown below the zone.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let slot = props.slot;
    let label = slot.label();
    let input_id = format!("{}File", slot.key());

    // Shared by the picker and drop paths.
    let mut accept_files = move |files: Vec<FileData>| {
        let Some(file) = files.first() else {
            return;
        };
        match SelectedFile::new(file.name()) {
            Ok(selected) => {
                error.set(None);
                props.on_select.call(selected);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let handle_files = {
        let input_id = input_id.clone();
        move |evt: FormEvent| {
            accept_files(evt.files());
            // Clear the input so picking the same file again after a
            // removal still fires `change`.
            reset_input(&input_id);
        }
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        accept_files(evt.files());
    };

    let handle_key = {
        let input_id = input_id.clone();
        move |evt: KeyboardEvent| {
            let activate = match evt.key() {
                Key::Enter => true,
                Key::Character(ref c) => c == " ",
                _ => false,
            };
            if activate {
                evt.prevent_default();
                open_picker(&input_id);
            }
        }
    };

    let zone_class = match (dragging(), props.file.is_some()) {
        (true, _) => "dropzone dragover",
        (false, true) => "dropzone has-file",
        (false, false) => "dropzone",
    };
    let title = props
        .file
        .as_ref()
        .map_or_else(|| label.to_owned(), |f| f.name().to_owned());

    rsx! {
        div { class: "dropzone-wrap",
            label {
                class: "{zone_class}",
                r#for: "{input_id}",
                tabindex: "0",
                role: "button",
                aria_label: "Upload {label}",
                ondragenter: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| {
                    dragging.set(false);
                },
                ondrop: handle_drop,
                onkeydown: handle_key,

                Icon { class: "dropzone-icon", width: 28, height: 28, icon: LdUpload }
                p { class: "dropzone-text",
                    strong { "{title}" }
                }
                p { class: "dropzone-hint", "Drag & drop or click to browse" }
            }

            input {
                id: "{input_id}",
                r#type: "file",
                class: "hidden",
                onchange: handle_files,
            }

            if let Some(ref file) = props.file {
                div { class: "chip-row",
                    div { class: "chip",
                        span { class: "chip-name", "{file.name()}" }
                        button {
                            class: "chip-remove",
                            r#type: "button",
                            aria_label: "Remove",
                            onclick: move |_| props.on_remove.call(slot),
                            Icon { width: 14, height: 14, icon: LdX }
                        }
                    }
                }
            }

            if let Some(ref err) = error() {
                p { class: "error-text", "{err}" }
            }
        }
    }
}

/// Programmatically click the hidden file input.
fn open_picker(input_id: &str) {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    match input {
        Some(input) => input.click(),
        None => tracing::warn!(input_id, "file input not found"),
    }
}

fn reset_input(input_id: &str) {
    if let Some(input) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}
