//! Core runtime configuration.
//!
//! This module defines configuration that is resolved once at process startup and then passed
//! into the note service and the health check. Nothing here reads environment variables; the
//! binary reads them and hands the values to [`NotesConfig::new`], which keeps request handling
//! independent of process-wide state and lets tests build any configuration they need.

use crate::constants::{
    DEFAULT_NOTION_API_BASE_URL, NOTION_PAGE_ID_ENV, NOTION_TOKEN_ENV, REQUEST_TIMEOUT,
};
use secrecy::SecretString;
use std::time::Duration;

/// Core configuration resolved at startup.
///
/// `notion_token` and `page_id` are both required for writing notes, but their absence is not a
/// construction error: the process still starts and reports the problem through
/// [`NotesConfig::validate`].
#[derive(Debug)]
pub struct NotesConfig {
    notion_token: Option<SecretString>,
    page_id: Option<String>,
    api_base_url: String,
    request_timeout: Duration,
}

/// Outcome of [`NotesConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigStatus {
    pub valid: bool,
    pub message: String,
}

impl NotesConfig {
    /// Create a new `NotesConfig`.
    ///
    /// Empty or whitespace-only values are treated as absent.
    pub fn new(notion_token: Option<String>, page_id: Option<String>) -> Self {
        Self {
            notion_token: non_blank(notion_token).map(SecretString::from),
            page_id: non_blank(page_id),
            api_base_url: DEFAULT_NOTION_API_BASE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the Notion API root, e.g. to point at a proxy or a mock server.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the outbound request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn notion_token(&self) -> Option<&SecretString> {
        self.notion_token.as_ref()
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Check that everything needed to write a note is present.
    ///
    /// The token is checked before the page id, so when both are missing the token is the one
    /// reported.
    pub fn validate(&self) -> ConfigStatus {
        if self.notion_token.is_none() {
            return ConfigStatus::invalid(format!(
                "{NOTION_TOKEN_ENV} environment variable is required"
            ));
        }
        if self.page_id.is_none() {
            return ConfigStatus::invalid(format!(
                "{NOTION_PAGE_ID_ENV} environment variable is required"
            ));
        }
        ConfigStatus {
            valid: true,
            message: "Configuration valid".into(),
        }
    }
}

impl ConfigStatus {
    fn invalid(message: String) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
