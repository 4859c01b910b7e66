//! Transient notice stack.

use leptos::*;

use crate::config::MESSAGES;
use crate::state::{Msg, UiState};
use crate::Dispatcher;

#[component]
pub fn ToastStack(state: ReadSignal<UiState>, dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || state.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let on_dismiss = move |_| {
                        dispatcher.dispatch(Msg::NoticeDismissed(id));
                    };

                    view! {
                        <div class=format!("toast {}", notice.kind.css_class())>
                            <span class="toast-text">{MESSAGES.notice_text(&notice.kind)}</span>
                            <button class="toast-close" on:click=on_dismiss>"✕"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
