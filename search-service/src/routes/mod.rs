pub mod health;
pub mod search;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use search::Catalog;

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/status", get(health::health_check))
        .route("/search", get(search::search_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
