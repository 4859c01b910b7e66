//! Hero section component

use leptos::*;

use crate::config::MESSAGES;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{MESSAGES.app_title}</h1>
            <p class="subtitle">{MESSAGES.app_subtitle}</p>
        </div>
    }
}
