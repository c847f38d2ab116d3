//! The result of a `/write` request and its two presentations.
//!
//! Every path through the handler produces one [`WriteOutcome`]. The request's
//! [`ResponseMode`](crate::mode::ResponseMode) then picks either [`WriteOutcome::into_json`] or
//! [`WriteOutcome::into_redirect`].

use crate::flash::{self, Flash};
use api_shared::WriteNoteRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;
use notes_core::{NotionError, WriteError};
use std::any::Any;

pub const SUCCESS_MESSAGE: &str = "Note written successfully";
pub const SUCCESS_FLASH: &str = "Note written successfully!";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";
pub const INVALID_PAGE_ID_MESSAGE: &str = "Invalid PAGE_ID format";
pub const TIMEOUT_MESSAGE: &str = "Request timeout - Notion API did not respond in time";
pub const CONNECT_MESSAGE: &str = "Connection error - Unable to reach Notion API";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutcome {
    pub success: bool,
    pub status: StatusCode,
    pub message: String,
}

impl WriteOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            status: StatusCode::OK,
            message: SUCCESS_MESSAGE.into(),
        }
    }

    /// Generic 500; the detail has already been logged by the caller.
    pub fn unexpected() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_MESSAGE)
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            message: message.into(),
        }
    }

    /// `{"status": ..., "message": ...}` with the outcome's status code.
    pub fn into_json(self) -> Response {
        let body = if self.success {
            WriteNoteRes::success(self.message)
        } else {
            WriteNoteRes::error(self.message)
        };
        (self.status, Json(body)).into_response()
    }

    /// Redirect back to the form with the outcome queued as a flash message.
    pub fn into_redirect(self, jar: SignedCookieJar) -> Response {
        let flash = if self.success {
            Flash::success(SUCCESS_FLASH)
        } else {
            Flash::error(format!("Error: {}", self.message))
        };
        (flash::set(jar, &flash), Redirect::to("/")).into_response()
    }
}

/// Response for a handler panic: the generic JSON 500, with the panic message logged.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".into());
    tracing::error!("Unexpected error: handler panicked: {detail}");
    WriteOutcome::unexpected().into_json()
}

impl From<WriteError> for WriteOutcome {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Config(message) => Self::error(StatusCode::BAD_REQUEST, message),
            WriteError::EmptyContent => Self::error(
                StatusCode::BAD_REQUEST,
                WriteError::EmptyContent.to_string(),
            ),
            WriteError::InvalidPageId(_) => {
                Self::error(StatusCode::BAD_REQUEST, INVALID_PAGE_ID_MESSAGE)
            }
            WriteError::Notion(NotionError::Upstream { status, .. }) => Self::error(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Failed to write note to Notion: {status}"),
            ),
            WriteError::Notion(NotionError::Timeout) => {
                Self::error(StatusCode::REQUEST_TIMEOUT, TIMEOUT_MESSAGE)
            }
            WriteError::Notion(NotionError::Connect(_)) => {
                Self::error(StatusCode::SERVICE_UNAVAILABLE, CONNECT_MESSAGE)
            }
            WriteError::Notion(NotionError::Client(_) | NotionError::Request(_)) => {
                Self::unexpected()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use notes_core::BlockIdError;

    #[test]
    fn test_error_mapping() {
        let cases = [
            (
                WriteError::Config("NOTION_TOKEN environment variable is required".into()),
                StatusCode::BAD_REQUEST,
                "NOTION_TOKEN environment variable is required",
            ),
            (
                WriteError::EmptyContent,
                StatusCode::BAD_REQUEST,
                "Content cannot be empty",
            ),
            (
                WriteError::InvalidPageId(BlockIdError::InvalidLength { actual: 8 }),
                StatusCode::BAD_REQUEST,
                INVALID_PAGE_ID_MESSAGE,
            ),
            (
                WriteError::Notion(NotionError::Upstream {
                    status: 404,
                    body: "{}".into(),
                }),
                StatusCode::NOT_FOUND,
                "Failed to write note to Notion: 404",
            ),
            (
                WriteError::Notion(NotionError::Timeout),
                StatusCode::REQUEST_TIMEOUT,
                TIMEOUT_MESSAGE,
            ),
        ];

        for (err, status, message) in cases {
            let outcome = WriteOutcome::from(err);
            assert!(!outcome.success);
            assert_eq!(outcome.status, status);
            assert_eq!(outcome.message, message);
        }
    }

    #[test]
    fn test_upstream_body_is_not_exposed() {
        let outcome = WriteOutcome::from(WriteError::Notion(NotionError::Upstream {
            status: 400,
            body: "validation_error: secret detail".into(),
        }));
        assert!(!outcome.message.contains("secret detail"));
    }

    #[test]
    fn test_redirect_targets_index() {
        let jar = SignedCookieJar::new(flash::signing_key("test"));
        let response = WriteOutcome::success().into_redirect(jar);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[test]
    fn test_json_uses_outcome_status() {
        let response = WriteOutcome::unexpected().into_json();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
