//! HTTP client for the mediadrop server.
//!
//! Workflows talk to the server through [`MediaApi`] so the submission logic
//! can run against a scripted fake in tests. [`HttpApi`] is the browser
//! implementation backed by `gloo-net`.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{ApiConfig, FILE_FIELD};
use crate::types::{ApiResponse, AppError, AppResult, RegisterRequest};
use crate::workflow::FileHandle;

/// Ordered text fields of a submitted form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FormFields::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Remove every entry named `name`, returning the first value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut removed = None;
        self.0.retain(|(field, value)| {
            if field != name {
                return true;
            }
            if removed.is_none() {
                removed = Some(value.clone());
            }
            false
        });
        removed
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A ready-to-send upload: credential already split from the form fields.
#[derive(Clone, Debug)]
pub struct UploadRequest<F> {
    /// Selected file, sent as the `file` part
    pub file: Option<F>,
    /// Bearer credential
    pub credential: String,
    /// Remaining text fields, sent as extra parts
    pub fields: FormFields,
}

impl<F> UploadRequest<F> {
    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.credential)
    }
}

/// Server operations used by the workflows.
///
/// Implementations report transport problems as [`AppError::Transport`] and
/// return every HTTP status, successful or not, as an [`ApiResponse`].
#[allow(async_fn_in_trait)]
pub trait MediaApi {
    /// File handle type accepted by [`MediaApi::upload`].
    type File: FileHandle;

    /// `POST /media/upload`
    async fn upload(&self, request: UploadRequest<Self::File>) -> AppResult<ApiResponse>;

    /// `POST /user/register`
    async fn register(&self, request: &RegisterRequest) -> AppResult<ApiResponse>;
}

/// Browser HTTP client.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl MediaApi for HttpApi {
    type File = File;

    async fn upload(&self, request: UploadRequest<File>) -> AppResult<ApiResponse> {
        let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;

        if let Some(file) = &request.file {
            form_data
                .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
                .map_err(|e| js_error("Failed to append file", e))?;
        }
        for (name, value) in request.fields.iter() {
            form_data
                .append_with_str(name, value)
                .map_err(|e| js_error("Failed to append field", e))?;
        }

        let response = Request::post(&self.config.upload_url())
            .header("Authorization", &request.authorization())
            .body(form_data)?
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("upload answered {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<ApiResponse> {
        let response = Request::post(&self.config.register_url())
            .json(request)?
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("register answered {}", status);

        Ok(ApiResponse { status, body })
    }
}

fn js_error(context: &str, err: JsValue) -> AppError {
    AppError::Transport(format!("{}: {:?}", context, err))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_remove_strips_every_entry() {
        let mut fields = FormFields::new()
            .with("key", "secret")
            .with("caption", "cat")
            .with("key", "other");

        assert_eq!(fields.remove("key").as_deref(), Some("secret"));
        assert_eq!(fields.get("key"), None);
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("caption", "cat")]);
    }

    #[test]
    fn test_form_fields_remove_missing() {
        let mut fields = FormFields::new().with("caption", "cat");
        assert_eq!(fields.remove("key"), None);
        assert_eq!(fields.get("caption"), Some("cat"));
    }

    #[test]
    fn test_authorization_header() {
        let request: UploadRequest<()> = UploadRequest {
            file: None,
            credential: "abc".to_string(),
            fields: FormFields::new(),
        };
        assert_eq!(request.authorization(), "Bearer abc");
    }
}
