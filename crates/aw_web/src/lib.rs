use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/feed", get(handlers::feed))
        .route("/api/chat", post(handlers::chat))
        .route("/api/save", post(handlers::save).delete(handlers::unsave))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use aw_core::{ArticleCatalog, ChatRequest, ChatResponse, FeedFilters, FeedResult};
}
