//! # API REST
//!
//! HTTP front end for writing notes to Notion.
//!
//! Handles:
//! - HTTP endpoints with axum (`/`, `/write`, `/health`)
//! - Choosing JSON or redirect-with-flash responses from the request's content type
//! - The HTML note form and signed flash cookies
//! - OpenAPI/Swagger documentation
//!
//! Uses `notes-core` for the write pipeline and `api-shared` for response types.

#![warn(rust_2018_idioms)]

pub mod flash;
pub mod handlers;
pub mod mode;
pub mod outcome;
pub mod page;

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use notes_core::NoteService;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
///
/// Holds the note service (configuration plus a pooled Notion client) and the key used to
/// sign flash cookies. Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
    flash_key: Key,
}

impl AppState {
    pub fn new(notes: NoteService, session_secret: &str) -> Self {
        Self {
            notes,
            flash_key: flash::signing_key(session_secret),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::write_note, handlers::health),
    components(schemas(
        api_shared::HealthRes,
        api_shared::WriteNoteReq,
        api_shared::WriteNoteRes,
        api_shared::ResponseStatus,
    ))
)]
pub struct ApiDoc;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/write",
            post(handlers::write_note).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(handlers::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(outcome::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
