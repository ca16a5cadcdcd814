//! mediadrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading media to a mediadrop server and
//! registering new accounts with an invite key.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/"          UploadPage                                     │
//! │               ├── drop zone  ──► FileIntake                  │
//! │               ├── key entry  ──► UploadWorkflow ──► MediaApi │
//! │               └── ResultPanel ◄── SubmissionOutcome          │
//! │  "/register"  RegisterPage                                   │
//! │               ├── form       ──► RegistrationWorkflow        │
//! │               └── ResultPanel ◄── RegistrationOutcome        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Outcomes, API bodies, errors
//! - [`workflow`] - Submission state machines, free of view code
//! - [`components`] - UI components
//! - [`services`] - HTTP client for the server

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Outcomes
    IssuedKey, Outcome, RegistrationOutcome, ResourcePath, SubmissionOutcome,
    // API
    ApiMessage, ApiResponse, RegisterRequest,
    // Environment
    Origin,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// Workflows
pub use workflow::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and the panic hook, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 mediadrop - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|page: String| format!("{} | mediadrop", page)/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/register" view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}
