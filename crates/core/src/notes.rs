//! Note submission.
//!
//! [`NoteService`] runs the write pipeline for one note: configuration check, content check,
//! page id formatting, and the single outbound Notion call. It never retries; the first failure
//! is returned to the caller, which decides how to present it.

use crate::config::{ConfigStatus, NotesConfig};
use crate::constants::LOG_PREVIEW_CHARS;
use crate::error::{NotionError, NotionResult, WriteError, WriteResult};
use crate::notion::NotionClient;
use notes_block_id::BlockId;
use secrecy::SecretString;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct NoteService {
    cfg: Arc<NotesConfig>,
    client: NotionClient,
}

impl NoteService {
    /// Create a note service with its own Notion client.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Client`] if the HTTP client cannot be initialised.
    pub fn new(cfg: Arc<NotesConfig>) -> NotionResult<Self> {
        let client = NotionClient::new(&cfg)?;
        Ok(Self { cfg, client })
    }

    /// Current configuration status, as reported by the index page and health check.
    pub fn config_status(&self) -> ConfigStatus {
        self.cfg.validate()
    }

    /// Fail early when the configuration cannot support a write.
    pub fn check_config(&self) -> WriteResult<()> {
        self.credentials().map(|_| ())
    }

    /// Append `content` to the configured page as a single paragraph.
    ///
    /// `content` is trimmed first. Nothing is sent when the configuration is invalid, the
    /// trimmed content is empty, or the page id is not 32 characters long.
    pub async fn write_note(&self, content: &str) -> WriteResult<()> {
        let (token, page_id) = self.credentials()?;

        let content = content.trim();
        if content.is_empty() {
            tracing::warn!("Empty content provided");
            return Err(WriteError::EmptyContent);
        }

        let block_id = BlockId::parse(page_id).inspect_err(|e| {
            tracing::error!("Failed to format NOTION_PAGE_ID {page_id:?}: {e}");
        })?;

        let preview: String = content.chars().take(LOG_PREVIEW_CHARS).collect();
        tracing::info!("Sending note to Notion: {preview}...");

        match self.client.append_paragraph(token, &block_id, content).await {
            Ok(()) => {
                tracing::info!("Note successfully written to Notion");
                Ok(())
            }
            Err(e) => {
                match &e {
                    NotionError::Upstream { status, body } => {
                        tracing::error!("Notion API error: {status} - {body}");
                    }
                    NotionError::Timeout => {
                        tracing::error!("Timeout while connecting to Notion API");
                    }
                    NotionError::Connect(err) => {
                        tracing::error!("Connection error while connecting to Notion API: {err}");
                    }
                    NotionError::Client(err) | NotionError::Request(err) => {
                        tracing::error!("Unexpected error: {err}");
                    }
                }
                Err(e.into())
            }
        }
    }

    fn credentials(&self) -> WriteResult<(&SecretString, &str)> {
        match (self.cfg.notion_token(), self.cfg.page_id()) {
            (Some(token), Some(page_id)) => Ok((token, page_id)),
            _ => {
                let status = self.cfg.validate();
                tracing::error!("Configuration error: {}", status.message);
                Err(WriteError::Config(status.message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::patch, Router};
    use notes_block_id::BlockIdError;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const PAGE_ID: &str = "2020b70967ed803ba28fdc5ed49984a0";

    async fn spawn_counting(status: StatusCode, hits: Arc<AtomicUsize>) -> SocketAddr {
        let app = Router::new().route(
            "/v1/blocks/:block_id/children",
            patch(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn service(addr: SocketAddr, token: Option<&str>, page_id: Option<&str>) -> NoteService {
        let cfg = NotesConfig::new(token.map(Into::into), page_id.map(Into::into))
            .with_api_base_url(format!("http://{addr}/v1"))
            .with_request_timeout(Duration::from_millis(300));
        NoteService::new(Arc::new(cfg)).unwrap()
    }

    #[tokio::test]
    async fn test_write_note_success() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits.clone()).await;
        let svc = service(addr, Some("secret_abc"), Some(PAGE_ID));

        svc.write_note("  Buy milk  ").await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_content_makes_no_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits.clone()).await;
        let svc = service(addr, Some("secret_abc"), Some(PAGE_ID));

        for content in ["", "   ", "\n\t "] {
            let err = svc.write_note(content).await.unwrap_err();
            assert!(matches!(err, WriteError::EmptyContent));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_config_makes_no_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits.clone()).await;
        let svc = service(addr, None, None);

        let err = svc.write_note("Buy milk").await.unwrap_err();
        match err {
            WriteError::Config(message) => {
                assert_eq!(message, "NOTION_TOKEN environment variable is required")
            }
            other => panic!("expected config error, got {other:?}"),
        }
        assert!(svc.check_config().is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_config_is_checked_before_content() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits).await;
        let svc = service(addr, Some("secret_abc"), None);

        let err = svc.write_note("   ").await.unwrap_err();
        assert!(matches!(err, WriteError::Config(_)));
    }

    #[tokio::test]
    async fn test_bad_page_id_makes_no_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits.clone()).await;
        let svc = service(addr, Some("secret_abc"), Some("2020b709"));

        let err = svc.write_note("Buy milk").await.unwrap_err();
        assert!(matches!(
            err,
            WriteError::InvalidPageId(BlockIdError::InvalidLength { actual: 8 })
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_propagated() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::NOT_FOUND, hits.clone()).await;
        let svc = service(addr, Some("secret_abc"), Some(PAGE_ID));

        let err = svc.write_note("Buy milk").await.unwrap_err();
        assert!(matches!(
            err,
            WriteError::Notion(NotionError::Upstream { status: 404, .. })
        ));
        // No retries.
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_config_status() {
        let hits = Arc::new(AtomicUsize::new(0));
        let addr = spawn_counting(StatusCode::OK, hits).await;

        assert!(service(addr, Some("secret_abc"), Some(PAGE_ID))
            .config_status()
            .valid);
        assert!(!service(addr, Some("secret_abc"), None).config_status().valid);
    }
}
