use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use notes_core::constants::{NOTION_PAGE_ID_ENV, NOTION_TOKEN_ENV};
use notes_core::{NoteService, NotesConfig};

/// Signing secret used when `SESSION_SECRET` is unset. Local development only.
const DEV_SESSION_SECRET: &str = "dev-secret-key";

/// Main entry point for the notes application
///
/// Reads configuration from the environment once, then serves the note form, the `/write`
/// endpoint and the health check until Ctrl-C or SIGTERM.
///
/// # Environment Variables
/// - `NOTION_TOKEN`: Notion integration token (required to write notes)
/// - `NOTION_PAGE_ID`: 32-character id of the page notes are appended to (required to write notes)
/// - `SESSION_SECRET`: secret for signing flash cookies (default: insecure development value)
/// - `NOTES_ADDR`: listen address (default: "0.0.0.0:5000")
/// - `NOTION_API_BASE_URL`: Notion API root (default: "https://api.notion.com/v1")
///
/// A missing token or page id does not stop startup; it is reported on `/` and `/health`.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the listen address is invalid or cannot be bound,
/// - the HTTP client cannot be built, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes_run=info".parse()?)
                .add_directive("notes_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("NOTES_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:5000".into())
        .parse()?;

    let mut cfg = NotesConfig::new(
        std::env::var(NOTION_TOKEN_ENV).ok(),
        std::env::var(NOTION_PAGE_ID_ENV).ok(),
    );
    if let Ok(base_url) = std::env::var("NOTION_API_BASE_URL") {
        cfg = cfg.with_api_base_url(base_url);
    }

    let status = cfg.validate();
    if status.valid {
        tracing::info!("++ Notion configuration valid");
    } else {
        tracing::warn!("!! {}; notes cannot be written", status.message);
    }

    let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
        tracing::warn!("!! SESSION_SECRET not set, using insecure development default");
        DEV_SESSION_SECRET.into()
    });

    let notes = NoteService::new(Arc::new(cfg))?;
    let app = api_rest::router(AppState::new(notes, &session_secret));

    tracing::info!("++ Starting notes server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Notes server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("-- Shutdown signal received");
}
