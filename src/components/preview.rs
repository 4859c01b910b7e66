//! Componente de vista previa de la imagen seleccionada

use leptos::*;

use crate::config::MESSAGES;
use crate::state::UiState;

#[component]
pub fn PreviewSection(state: ReadSignal<UiState>) -> impl IntoView {
    view! {
        <Show
            when=move || state.get().preview.is_some()
            fallback=|| view! {}
        >
            <div class="preview-section">
                <img
                    class="preview-image"
                    alt=MESSAGES.preview_alt
                    src=move || {
                        state
                            .get()
                            .preview
                            .map(|preview| preview.url().to_string())
                            .unwrap_or_default()
                    }
                />
            </div>
        </Show>
    }
}
