use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::service::home::homepage;
use crate::service::sentence::{upload_file, upload_text};
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/upload-text", post(upload_text))
        .route("/upload-file", post(upload_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
