//! Minimal Notion API client.
//!
//! Wraps a pooled [`reqwest::Client`] configured with the outbound request timeout, and exposes
//! the one call this service makes: appending a paragraph to a block.

use crate::blocks::AppendBlockChildren;
use crate::config::NotesConfig;
use crate::constants::{NOTION_VERSION, NOTION_VERSION_HEADER};
use crate::error::{NotionError, NotionResult};
use notes_block_id::BlockId;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Debug)]
pub struct NotionClient {
    http: reqwest::Client,
    api_base_url: String,
}

impl NotionClient {
    /// Build a client from the API root and timeout in `cfg`.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Client`] if the underlying HTTP client cannot be initialised.
    pub fn new(cfg: &NotesConfig) -> NotionResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(NotionError::Client)?;

        Ok(Self {
            http,
            api_base_url: cfg.api_base_url().to_string(),
        })
    }

    /// URL of the block-children endpoint for `block_id`.
    pub fn children_url(&self, block_id: &BlockId) -> String {
        format!("{}/blocks/{}/children", self.api_base_url, block_id)
    }

    /// Append one paragraph containing `content` to `block_id`.
    ///
    /// Only `200 OK` counts as success.
    ///
    /// # Errors
    ///
    /// - [`NotionError::Timeout`] if no response arrives within the configured timeout,
    /// - [`NotionError::Connect`] if the API cannot be reached,
    /// - [`NotionError::Upstream`] for any non-200 response, carrying its status and body,
    /// - [`NotionError::Request`] for any other transport failure.
    pub async fn append_paragraph(
        &self,
        token: &SecretString,
        block_id: &BlockId,
        content: &str,
    ) -> NotionResult<()> {
        let response = self
            .http
            .patch(self.children_url(block_id))
            .bearer_auth(token.expose_secret())
            .header(NOTION_VERSION_HEADER, NOTION_VERSION)
            .json(&AppendBlockChildren::paragraph(content))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotionError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}
