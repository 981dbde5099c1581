//! HTTP router.
//!
//! Routes are nested under `/api/`, plus the bare `POST /classify`
//! compatibility route. Layers (outermost first): trace, CORS, no-store.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::app_state::AppState;
use crate::intake::upload::MAX_UPLOAD_BYTES;

/// Multipart framing headroom above the file limit, so oversized files
/// reach `validate_upload` and get a precise error.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

/// Build the full application router.
pub fn api_router(state: Arc<AppState>) -> Router {
    let ctx = ApiContext::new(state);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/classify", post(endpoints::classify::classify))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route(
            "/upload",
            post(endpoints::upload::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/knowledge/:disease", get(endpoints::knowledge::info))
        .route("/knowledge/:disease/tips", get(endpoints::knowledge::tips))
        .route("/history", get(endpoints::history::list))
        .route("/history/:id", get(endpoints::history::detail))
        .route("/chat/sessions", post(endpoints::chat::create))
        .route("/chat/sessions/:id", get(endpoints::chat::get))
        .route("/chat/sessions/:id/messages", post(endpoints::chat::send))
        .route("/chat/sessions/:id/verify", post(endpoints::chat::verify));

    Router::new()
        .route("/classify", post(endpoints::classify::classify))
        .nest("/api", api)
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
