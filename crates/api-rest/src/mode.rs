//! How a `/write` request arrived, and reading the note out of its body.
//!
//! The declared `Content-Type` decides both how the body is parsed and how the outcome is
//! presented: JSON requests get a JSON status object, everything else is treated as an HTML
//! form post and gets a redirect with a flash message.

use api_shared::WriteNoteReq;
use axum::http::{header::CONTENT_TYPE, HeaderMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
    Json,
    Form,
}

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid form body: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
}

impl ResponseMode {
    /// `Json` for `application/json` and `application/*+json`, ignoring parameters and case.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return Self::Form;
        };

        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json"
            || (mime.starts_with("application/") && mime.ends_with("+json"))
        {
            Self::Json
        } else {
            Self::Form
        }
    }

    /// Read the `content` field from `body`. A missing field reads as empty.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a JSON object (JSON mode), when `content` is present but not a
    /// string, or when the form body cannot be decoded.
    pub fn parse_body(self, body: &[u8]) -> Result<WriteNoteReq, BodyError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(body)?),
            Self::Form => {
                // Repeated fields are allowed; the first `content` wins.
                let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
                let content = pairs
                    .into_iter()
                    .find(|(name, _)| name == "content")
                    .map(|(_, value)| value)
                    .unwrap_or_default();
                Ok(WriteNoteReq { content })
            }
        }
    }
}
