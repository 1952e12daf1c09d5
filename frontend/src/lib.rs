//! Sentiment Analysis - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that lets an authenticated user upload a CSV file
//! to the sentiment analysis service and review the per-row results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (session gate)                                  │
//! │  ├── LoginView            (no credential)                    │
//! │  └── Dashboard            (credential present)               │
//! │      ├── ScrollChrome + Header (logout)                      │
//! │      ├── UploadSection    (picker / drop zone)               │
//! │      ├── error message                                       │
//! │      └── ResultsSection   (chart + table)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - API base URL and client constants
//! - [`types`] - Credential, ResultSet, OperationFailure
//! - [`state`] - Session and upload state machines
//! - [`services`] - Service client and async workflows
//! - [`presenter`] - Chart and table derivation
//! - [`reveal`] - Scroll reveal observer
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod services;
pub mod presenter;
pub mod reveal;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Session
    AuthMode, Credential,
    // Analysis
    ResultRow, ResultSet, Sentiment, Statistics,
    // Upload
    UploadRequest,
    // Errors
    FailureKind, OperationFailure, OperationResult,
};

// State
pub use state::{SessionPhase, SessionState, Store, UploadState, UploadTicket};

// Presentation
pub use presenter::{present, ChartData, DisplayRow, Presentation};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Sentiment Analysis - Starting Leptos App (API: {})", api_base_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sentiment Analysis"/>
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
    // The session owns the credential; nothing else writes it
    let session = create_rw_signal(SessionState::default());
    let authenticated = move || session.with(SessionState::is_authenticated);

    view! {
        <Show
            when=authenticated
            fallback=move || view! { <LoginView session=session/> }
        >
            <Dashboard session=session/>
        </Show>
    }
}
