//! Success / error cards shown under each form.
//!
//! [`upload_panel`] and [`registration_panel`] turn an outcome into a
//! [`Panel`] without touching the DOM; [`ResultPanel`] only draws it.

use leptos::*;

use crate::types::{Origin, RegistrationOutcome, SubmissionOutcome};

/// What the result area displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    Hidden,
    Success {
        caption: &'static str,
        body: PanelBody,
    },
    Error {
        message: String,
    },
}

/// Content of a success card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelBody {
    /// Shareable link: `href` is server-relative, `text` the absolute URL
    Link { href: String, text: String },
    /// Literal value to copy
    Text(String),
}

/// Panel for the upload screen.
pub fn upload_panel(outcome: &SubmissionOutcome, origin: &Origin) -> Panel {
    match outcome {
        SubmissionOutcome::Empty => Panel::Hidden,
        SubmissionOutcome::Success(path) => Panel::Success {
            caption: "Your image URL is ready.",
            body: PanelBody::Link {
                href: path.as_str().to_string(),
                text: origin.absolute_url(path.as_str()),
            },
        },
        SubmissionOutcome::Failure(message) => Panel::Error {
            message: message.clone(),
        },
    }
}

/// Panel for the registration screen.
pub fn registration_panel(outcome: &RegistrationOutcome) -> Panel {
    match outcome {
        RegistrationOutcome::Empty => Panel::Hidden,
        RegistrationOutcome::Success(key) => Panel::Success {
            caption: "Your account is registered.",
            body: PanelBody::Text(key.as_str().to_string()),
        },
        RegistrationOutcome::Failure(message) => Panel::Error {
            message: message.clone(),
        },
    }
}

#[component]
pub fn ResultPanel(
    /// Panel to draw
    #[prop(into)]
    panel: Signal<Panel>,
) -> impl IntoView {
    move || match panel.get() {
        Panel::Hidden => ().into_view(),
        Panel::Success { caption, body } => view! {
            <div class="card success-card">
                <h2>"Success!"</h2>
                <p class="card-text">{caption}</p>
                {match body {
                    PanelBody::Link { href, text } => view! {
                        <a href=href class="unstyled-anchor">{text}</a>
                    }.into_view(),
                    PanelBody::Text(text) => view! {
                        <p class="success-text">{text}</p>
                    }.into_view(),
                }}
            </div>
        }
        .into_view(),
        Panel::Error { message } => view! {
            <div class="card error-card">
                <h2>"Error!"</h2>
                <p class="card-text">{message}</p>
            </div>
        }
        .into_view(),
    }
}
