//! Application configuration.
//!
//! Centralized configuration for the mediadrop frontend. The UI is served by
//! the same host as the API, so every endpoint is resolved against the page
//! origin unless an explicit base URL is given.

/// Backend API base URL.
///
/// Empty means same-origin relative requests.
pub const API_BASE_URL: &str = "";

/// Upload endpoint path.
pub const UPLOAD_ENDPOINT: &str = "/media/upload";

/// Registration endpoint path.
pub const REGISTER_ENDPOINT: &str = "/user/register";

/// Route under which uploaded media is served.
pub const MEDIA_ROUTE: &str = "/media";

/// Multipart part carrying the selected file.
pub const FILE_FIELD: &str = "file";

/// Form field holding the upload credential.
///
/// Stripped from the form body and sent as a bearer token instead.
pub const CREDENTIAL_FIELD: &str = "key";

/// Drop zone label while nothing is selected.
pub const DROP_PLACEHOLDER: &str = "Drag a File or Click Here";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Endpoint resolution for the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path. No trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_ENDPOINT)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_ENDPOINT)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}
