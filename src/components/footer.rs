//! Footer component

use leptos::*;

use crate::config::MESSAGES;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>{MESSAGES.footer_note} " " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
