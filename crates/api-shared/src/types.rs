//! JSON bodies exchanged over the notes HTTP API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall result reported in JSON responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    /// Always `"healthy"` when the process can answer.
    pub status: String,
    /// Whether a Notion token and page id are configured.
    pub notion_configured: bool,
    pub message: String,
}

/// JSON body of `POST /write`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WriteNoteReq {
    /// Note text; surrounding whitespace is trimmed and it must not be empty.
    #[serde(default)]
    pub content: String,
}

/// JSON response of `POST /write`, for both success and failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WriteNoteRes {
    pub status: ResponseStatus,
    pub message: String,
}

impl WriteNoteRes {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}
