//! HTTP surface: HTML form pages plus a small JSON API.

pub mod flash;
pub mod handlers;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        AppState { store }
    }
}

/// Build the full router around `state`
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/summary", get(handlers::api_summary))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_appliance))
        .route("/download", get(handlers::download_csv))
        .route("/clear", get(handlers::clear_data))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
