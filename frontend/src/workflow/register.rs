//! Account registration with an invite key.

use crate::services::MediaApi;
use crate::types::{
    ApiMessage, AppError, AppResult, IssuedKey, Outcome, RegisterRequest, RegistrationOutcome,
};

use super::{Generations, OutcomeSink};

pub const MISSING_USERNAME: &str = "You must provide a username!";
pub const MISSING_INVITE_KEY: &str = "You must provide an invite key!";
pub const INVALID_INVITE_KEY: &str = "The provided key was invalid.";
pub const REGISTRATION_FAILED: &str = "There was an error when registering your account.";
pub const REGISTRATION_FAILED_PREFIX: &str = "There was an error when registering your account: ";

/// Contents of the registration form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub invite_key: String,
}

/// Registration submitter. Same attempt lifecycle as
/// [`UploadWorkflow`](super::UploadWorkflow).
#[derive(Clone, Debug)]
pub struct RegistrationWorkflow<A> {
    api: A,
    generations: Generations,
}

impl<A: MediaApi> RegistrationWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generations: Generations::default(),
        }
    }

    pub async fn submit<S>(&self, sink: &S, form: RegistrationForm)
    where
        S: OutcomeSink<IssuedKey>,
    {
        let ticket = self.generations.begin();
        sink.publish(Outcome::Empty);

        let outcome: RegistrationOutcome = match self.send(form).await {
            Ok(key) => {
                log::info!("✅ Account registered");
                Outcome::Success(key)
            }
            Err(e) => {
                log::warn!("❌ Registration failed: {}", e);
                Outcome::Failure(failure_message(&e))
            }
        };

        if self.generations.is_current(ticket) {
            sink.publish(outcome);
        } else {
            log::debug!("discarding stale registration result {:?}", ticket);
        }
    }

    async fn send(&self, form: RegistrationForm) -> AppResult<IssuedKey> {
        if form.username.is_empty() {
            return Err(AppError::Validation(MISSING_USERNAME));
        }
        if form.invite_key.is_empty() {
            return Err(AppError::Validation(MISSING_INVITE_KEY));
        }

        log::info!("📝 Registering {}...", form.username);
        let request = RegisterRequest {
            username: form.username,
            key: form.invite_key,
        };
        let response = self.api.register(&request).await?;

        if response.ok() {
            let body: ApiMessage = response.json()?;
            return Ok(IssuedKey::new(body.msg));
        }

        // Error bodies are informative only, a missing `msg` is not a failure.
        let message = response
            .json::<ApiMessage>()
            .map(|body| body.msg)
            .unwrap_or_default();
        match response.status {
            401 => Err(AppError::Unauthorized(message)),
            status => Err(AppError::Server { status, message }),
        }
    }
}

/// Text of the error panel for a failed registration.
fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Validation(message) => message.to_string(),
        AppError::Unauthorized(_) => INVALID_INVITE_KEY.to_string(),
        AppError::Server { message, .. } if !message.is_empty() => {
            format!("{}{}", REGISTRATION_FAILED_PREFIX, message)
        }
        AppError::Server { .. } | AppError::Transport(_) => REGISTRATION_FAILED.to_string(),
    }
}
