use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router for the login page and its endpoints.
pub fn router(static_dir: &Path) -> Router {
    Router::new()
        // Page routes
        .route("/", get(handlers::login_page))
        .route("/login", get(handlers::login_page).post(handlers::login))
        // API routes
        .route("/api/validate", post(handlers::validate_form))
        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
