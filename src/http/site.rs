//! Non-relay routes: landing page, status, fallback.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    Json,
};
use serde_json::json;

use crate::http::response::Envelope;
use crate::http::server::AppState;

static INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn status(State(state): State<AppState>) -> Json<Envelope> {
    Json(Envelope::success(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "state": "operational",
        "upstream": state.upstream.base_url().as_str(),
    })))
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Envelope>) {
    tracing::debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, Json(Envelope::error("Not Found")))
}
