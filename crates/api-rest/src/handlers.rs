//! Route handlers.

use crate::mode::ResponseMode;
use crate::outcome::WriteOutcome;
use crate::{flash, page, AppState};
use api_shared::{HealthRes, HealthService, WriteNoteReq, WriteNoteRes};
use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{Html, Response},
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;

/// Note form, with the configuration status and any pending flash message.
///
/// Rendering consumes the flash message.
pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, flash) = flash::take(jar);
    let html = page::render_index(&state.notes.config_status(), flash.as_ref());
    (jar, Html(html))
}

#[utoipa::path(
    post,
    path = "/write",
    request_body(
        content = WriteNoteReq,
        description = "JSON body; an `application/x-www-form-urlencoded` `content` field is also accepted and answered with a redirect"
    ),
    responses(
        (status = 200, description = "Note appended to the page", body = WriteNoteRes),
        (status = 303, description = "Form submission; outcome is carried in a flash message"),
        (status = 400, description = "Configuration missing, empty content or invalid page id", body = WriteNoteRes),
        (status = 408, description = "Notion did not respond in time", body = WriteNoteRes),
        (status = 500, description = "Unexpected error", body = WriteNoteRes),
        (status = 503, description = "Notion could not be reached", body = WriteNoteRes)
    )
)]
/// Append a note to the configured Notion page
///
/// Validates configuration and content, sends one paragraph to Notion, and reports the
/// outcome. JSON requests get a JSON status object with a matching status code; any other
/// request is answered with a redirect to `/` carrying a flash message. Non-200 answers from
/// Notion are passed through with their own status code.
pub async fn write_note(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mode = ResponseMode::from_headers(&headers);
    let outcome = submit(&state, mode, &body).await;

    match mode {
        ResponseMode::Json => outcome.into_json(),
        ResponseMode::Form => outcome.into_redirect(jar),
    }
}

async fn submit(state: &AppState, mode: ResponseMode, body: &[u8]) -> WriteOutcome {
    if let Err(e) = state.notes.check_config() {
        return e.into();
    }

    let req = match mode.parse_body(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("Unexpected error: {e}");
            return WriteOutcome::unexpected();
        }
    };

    match state.notes.write_note(&req.content).await {
        Ok(()) => WriteOutcome::success(),
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Always answers 200. `notion_configured` and `message` report whether a Notion token and page
/// id are configured; Notion itself is not contacted.
pub async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(&state.notes.config_status()))
}
