//! Credential-gated media upload.
//!
//! One call to [`UploadWorkflow::submit`] is one attempt: reset the outcome,
//! check the credential, send a single request, classify the reply.

use crate::config::CREDENTIAL_FIELD;
use crate::services::{FormFields, MediaApi, UploadRequest};
use crate::types::{ApiMessage, AppError, AppResult, Outcome, ResourcePath, SubmissionOutcome};

use super::{FileHandle, Generations, OutcomeSink};

/// Message shown when the credential field is left empty.
pub const MISSING_KEY: &str = "You must enter a key.";

/// Contents of the upload form at submit time.
#[derive(Clone, Debug)]
pub struct UploadForm<F> {
    /// File from the intake slot
    pub file: Option<F>,
    /// Text fields, including the credential field
    pub fields: FormFields,
}

/// Upload submitter.
///
/// Clones share the same generation counter, so a reply to an older attempt
/// is dropped once a newer attempt has started.
#[derive(Clone, Debug)]
pub struct UploadWorkflow<A> {
    api: A,
    generations: Generations,
}

impl<A: MediaApi> UploadWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generations: Generations::default(),
        }
    }

    /// Run one upload attempt and publish its outcome.
    pub async fn submit<S>(&self, sink: &S, form: UploadForm<A::File>)
    where
        S: OutcomeSink<ResourcePath>,
    {
        let ticket = self.generations.begin();
        sink.publish(Outcome::Empty);

        let outcome: SubmissionOutcome = match self.send(form).await {
            Ok(path) => {
                log::info!("✅ Upload stored at {}", path);
                Outcome::Success(path)
            }
            Err(e) => {
                log::warn!("❌ Upload failed: {}", e);
                Outcome::Failure(failure_message(&e))
            }
        };

        if self.generations.is_current(ticket) {
            sink.publish(outcome);
        } else {
            log::debug!("discarding stale upload result {:?}", ticket);
        }
    }

    async fn send(&self, mut form: UploadForm<A::File>) -> AppResult<ResourcePath> {
        let credential = form
            .fields
            .remove(CREDENTIAL_FIELD)
            .filter(|key| !key.is_empty())
            .ok_or(AppError::Validation(MISSING_KEY))?;

        if let Some(file) = &form.file {
            log::info!("📤 Uploading {}...", file.name());
        } else {
            log::warn!("Uploading without a selected file");
        }

        let response = self
            .api
            .upload(UploadRequest {
                file: form.file,
                credential,
                fields: form.fields,
            })
            .await?;

        // The server always answers with `{ msg }`, errors included.
        let body: ApiMessage = response.json()?;
        match response.status {
            200 => Ok(ResourcePath::from_identifier(&body.msg)),
            401 => Err(AppError::Unauthorized(body.msg)),
            status => Err(AppError::Server {
                status,
                message: body.msg,
            }),
        }
    }
}

/// Text of the error panel for a failed upload.
fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Validation(message) => message.to_string(),
        AppError::Unauthorized(message) => {
            format!("An error occurred when submitting: {}", message)
        }
        AppError::Server { message, .. } => format!("An error occurred when submitting {}", message),
        AppError::Transport(detail) => format!("An error occurred when submitting: {}", detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::{FakeApi, FakeFile};
    use crate::workflow::recorder::Recorder;
    use futures::executor::block_on;

    fn form(key: &str) -> UploadForm<FakeFile> {
        UploadForm {
            file: Some(FakeFile("cat.png")),
            fields: FormFields::new().with("key", key),
        }
    }

    #[test]
    fn test_missing_key_fails_without_request() {
        let api = FakeApi::new();
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("")));

        assert_eq!(api.calls(), 0);
        assert_eq!(
            sink.history(),
            vec![Outcome::Empty, Outcome::Failure("You must enter a key.".to_string())]
        );
    }

    #[test]
    fn test_absent_key_field_fails_without_request() {
        let api = FakeApi::new();
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        let form = UploadForm {
            file: Some(FakeFile("cat.png")),
            fields: FormFields::new(),
        };
        block_on(workflow.submit(&sink, form));

        assert_eq!(api.calls(), 0);
        assert_eq!(sink.last(), Outcome::Failure(MISSING_KEY.to_string()));
    }

    #[test]
    fn test_success_builds_media_path() {
        let api = FakeApi::new();
        api.reply(200, r#"{"msg":"abc123"}"#);
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));

        assert_eq!(
            sink.history(),
            vec![
                Outcome::Empty,
                Outcome::Success(ResourcePath::from_identifier("abc123"))
            ]
        );
        assert_eq!(sink.last(), Outcome::Success(ResourcePath::from_identifier("abc123")));
    }

    #[test]
    fn test_credential_sent_as_bearer_not_field() {
        let api = FakeApi::new();
        api.reply(200, r#"{"msg":"abc123.png"}"#);
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        let form = UploadForm {
            file: Some(FakeFile("cat.png")),
            fields: FormFields::new().with("key", "secret").with("caption", "cat"),
        };
        block_on(workflow.submit(&sink, form));

        let uploads = api.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].authorization(), "Bearer secret");
        assert_eq!(uploads[0].fields.get("key"), None);
        assert_eq!(uploads[0].fields.get("caption"), Some("cat"));
        assert_eq!(uploads[0].file, Some(FakeFile("cat.png")));
    }

    #[test]
    fn test_unauthorized_reports_server_message() {
        let api = FakeApi::new();
        api.reply(401, r#"{"msg":"Authorization token is invalid."}"#);
        let workflow = UploadWorkflow::new(api);
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("wrong")));

        assert_eq!(
            sink.last(),
            Outcome::Failure(
                "An error occurred when submitting: Authorization token is invalid.".to_string()
            )
        );
    }

    #[test]
    fn test_other_status_reports_server_message() {
        let api = FakeApi::new();
        api.reply(400, r#"{"msg":"could not determine mimetype."}"#);
        let workflow = UploadWorkflow::new(api);
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));

        assert_eq!(
            sink.last(),
            Outcome::Failure("An error occurred when submitting could not determine mimetype.".to_string())
        );
    }

    #[test]
    fn test_transport_failure_is_recovered() {
        let api = FakeApi::new();
        api.fail("TypeError: Failed to fetch");
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));

        assert_eq!(api.calls(), 1);
        assert_eq!(
            sink.last(),
            Outcome::Failure("An error occurred when submitting: TypeError: Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_unreadable_body_is_transport_failure() {
        let api = FakeApi::new();
        api.reply(502, "<html>Bad Gateway</html>");
        let workflow = UploadWorkflow::new(api);
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));

        match sink.last() {
            Outcome::Failure(message) => {
                assert!(message.starts_with("An error occurred when submitting: "))
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_without_file_still_sends_once() {
        let api = FakeApi::new();
        api.reply(400, r#"{"msg":"unable to find multipart field `file`."}"#);
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        let form = UploadForm {
            file: None,
            fields: FormFields::new().with("key", "secret"),
        };
        block_on(workflow.submit(&sink, form));

        let uploads = api.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file, None);
        assert_eq!(
            sink.last(),
            Outcome::Failure(
                "An error occurred when submitting unable to find multipart field `file`.".to_string()
            )
        );
    }

    #[test]
    fn test_success_body_without_msg_is_transport_failure() {
        let api = FakeApi::new();
        api.reply(200, "{}");
        let workflow = UploadWorkflow::new(api);
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));

        match sink.last() {
            Outcome::Failure(message) => {
                assert!(message.starts_with("An error occurred when submitting: "));
                assert!(message.contains("msg"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_resubmission_resets_previous_outcome_first() {
        let api = FakeApi::new();
        api.reply(200, r#"{"msg":"abc123"}"#);
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        block_on(workflow.submit(&sink, form("secret")));
        block_on(workflow.submit(&sink, form("")));

        assert_eq!(
            sink.history(),
            vec![
                Outcome::Empty,
                Outcome::Success(ResourcePath::from_identifier("abc123")),
                Outcome::Empty,
                Outcome::Failure(MISSING_KEY.to_string()),
            ]
        );
        assert_eq!(api.calls(), 1);
    }

    #[test]
    fn test_stale_reply_does_not_overwrite_newer_attempt() {
        let api = FakeApi::new();
        let first = api.deferred();
        let second = api.deferred();
        let workflow = UploadWorkflow::new(api.clone());
        let sink = Recorder::new();

        block_on(async {
            futures::join!(
                workflow.submit(&sink, form("secret")),
                workflow.submit(&sink, form("secret")),
                async {
                    let _ = second.send(Ok(crate::types::ApiResponse::new(200, r#"{"msg":"new"}"#)));
                    let _ = first.send(Ok(crate::types::ApiResponse::new(200, r#"{"msg":"old"}"#)));
                },
            );
        });

        assert_eq!(api.calls(), 2);
        let history = sink.history();
        assert!(!history.contains(&Outcome::Success(ResourcePath::from_identifier("old"))));
        assert_eq!(sink.last(), Outcome::Success(ResourcePath::from_identifier("new")));
    }
}
