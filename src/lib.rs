//! Analizador de Imágenes - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for uploading an image and rendering the labels the
//! analysis backend detects in it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (picker + analyze control)               │
//! │  ├── PreviewSection (selected image)                        │
//! │  └── ResultsSection (tags with confidences)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (transient notices)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Components never mutate state directly. They hand a [`Msg`] to the
//! [`Dispatcher`], which folds it through [`state::transition`] and then
//! interprets the returned [`Command`]s against the browser (object URLs,
//! the file input, the HTTP request, toast expiry).
//!
//! # Modules
//!
//! - [`config`] - Build-time settings (API URL, size limit, timeout)
//! - [`messages`] - User-facing texts
//! - [`types`] - Common types (SelectedFile, TagEntry, Notice, etc.)
//! - [`error`] - Validation and request error types
//! - [`validation`] - Selection checks
//! - [`state`] - Pure state machine
//! - [`components`] - UI components (Hero, Upload, Results, etc.)
//! - [`services`] - Backend communication and preview URLs

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod messages;
pub mod types;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Texts
pub use messages::Messages;

// Types
pub use types::{
    // Selection
    SelectedFile, PreviewRef,
    // API
    AnalyzeResponse, TagEntry,
    // Notices
    Notice, NoticeKind, InfoNotice,
};

// Errors
pub use error::{AnalyzeError, AnalyzeResult, ValidationError};

// State machine
pub use state::{transition, Command, Msg, UiState};

// Validation
pub use validation::validate_selection;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// State dispatch
// =============================================================================

/// Hands messages to the state machine and runs the side effects it asks
/// for. Copyable so every component can capture it in its event handlers.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: ReadSignal<UiState>,
    set_state: WriteSignal<UiState>,
    session_file: ReadSignal<Option<web_sys::File>>,
}

impl Dispatcher {
    pub fn new(
        state: ReadSignal<UiState>,
        set_state: WriteSignal<UiState>,
        session_file: ReadSignal<Option<web_sys::File>>,
    ) -> Self {
        Self {
            state,
            set_state,
            session_file,
        }
    }

    /// Advance the state machine by one message.
    pub fn dispatch(self, msg: Msg) {
        let (next, commands) = state::transition(self.state.get_untracked(), msg);
        self.set_state.set(next);
        for command in commands {
            self.run(command);
        }
    }

    fn run(self, command: Command) {
        match command {
            Command::RevokePreview(preview) => {
                revoke_preview(&preview);
            }

            Command::ClearPicker => {
                clear_file_input();
            }

            Command::SendRequest => {
                let file = match self.session_file.get_untracked() {
                    Some(file) => file,
                    None => {
                        log::error!("❌ No hay archivo en la sesión para analizar");
                        self.dispatch(Msg::AnalysisFinished(Err(AnalyzeError::Network(
                            "no file handle in session".to_string(),
                        ))));
                        return;
                    }
                };

                spawn_local(async move {
                    let result = analyze_image(&file, api_url(), REQUEST_TIMEOUT_SECS).await;
                    if let Err(e) = &result {
                        log::error!("❌ Análisis fallido: {}", e);
                    }
                    self.dispatch(Msg::AnalysisFinished(result));
                });
            }

            Command::ScheduleNoticeDismiss { id } => {
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                    self.dispatch(Msg::NoticeDismissed(id));
                });
            }
        }
    }
}

/// Reset the hidden file input so re-picking the same file fires `change`.
fn clear_file_input() {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                    html_input.set_value("");
                }
            }
        }
    }
}

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Analizador de Imágenes - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the widget
    let (ui_state, set_ui_state) = create_signal(UiState::default());
    let (session_file, set_session_file) = create_signal(None::<web_sys::File>);

    let dispatcher = Dispatcher::new(ui_state, set_ui_state, session_file);

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                state=ui_state
                dispatcher=dispatcher
                set_session_file=set_session_file
            />

            <PreviewSection state=ui_state/>

            <ResultsSection state=ui_state/>
        </div>

        <ToastStack state=ui_state dispatcher=dispatcher/>

        <Footer/>
    }
}
