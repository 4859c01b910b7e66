//! Image selection component.
//!
//! Validates the picked file at the browser edge, creates its preview, and
//! drives the analyze control. Everything else goes through the dispatcher.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::config::{FILE_INPUT_ID, MAX_IMAGE_SIZE_BYTES, MESSAGES};
use crate::services::create_preview;
use crate::state::{Msg, UiState};
use crate::types::SelectedFile;
use crate::validation::validate_selection;
use crate::Dispatcher;

#[component]
pub fn UploadSection(
    state: ReadSignal<UiState>,
    dispatcher: Dispatcher,
    set_session_file: WriteSignal<Option<web_sys::File>>,
) -> impl IntoView {
    // Handler para el cambio de archivo
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // El picker queda fuera de servicio durante el análisis
        if state.get().busy {
            input.set_value("");
            return;
        }

        if let Some(files) = input.files() {
            if files.length() > 0 {
                if let Some(file) = files.get(0) {
                    let candidate = SelectedFile {
                        name: file.name(),
                        size: file.size() as u64,
                        media_type: file.type_(),
                    };

                    match validate_selection(&candidate, MAX_IMAGE_SIZE_BYTES) {
                        Ok(()) => {
                            let preview = match create_preview(&file) {
                                Ok(preview) => Some(preview),
                                Err(e) => {
                                    log::warn!(
                                        "⚠️ Sin vista previa para '{}': {:?}",
                                        candidate.name,
                                        e
                                    );
                                    None
                                }
                            };

                            set_session_file.set(Some(file));
                            dispatcher.dispatch(Msg::FileAccepted {
                                file: candidate,
                                preview,
                            });
                        }
                        Err(reason) => {
                            log::warn!("⚠️ Selección rechazada: {}", reason);
                            dispatcher.dispatch(Msg::SelectionRejected(reason));
                        }
                    }
                }
            }
        }
    };

    // Handler para cliquear la zona entera
    let trigger_file_input = move |_| {
        if state.get().busy {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    let on_analyze = move |_| {
        dispatcher.dispatch(Msg::AnalyzePressed);
    };

    view! {
        <div class="upload-section" id="uploadZone" on:click=trigger_file_input>
            <div class="upload-icon">"🖼️"</div>
            <div class="upload-text">
                {move || match state.get().selected {
                    Some(file) => file.name,
                    None => MESSAGES.pick_zone_hint.to_string(),
                }}
            </div>

            <input
                type="file"
                id=FILE_INPUT_ID
                accept="image/*"
                style="display:none"
                disabled=move || state.get().busy
                on:change=on_file_change
            />

            <div class="upload-button">{MESSAGES.pick_button}</div>
        </div>

        <button
            class="analyze-button"
            disabled=move || analyze_disabled(&state.get())
            on:click=on_analyze
        >
            {move || if state.get().busy {
                MESSAGES.analyzing_button
            } else {
                MESSAGES.analyze_button
            }}
        </button>
    }
}

/// The analyze control accepts input only when a file is selected and no
/// request is in flight. The reducer keeps its own no-file guard, so a
/// press that slips through still only produces the prompt notice.
fn analyze_disabled(state: &UiState) -> bool {
    state.selected.is_none() || state.busy
}
