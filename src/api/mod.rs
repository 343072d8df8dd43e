pub mod combos;
pub mod menu;
pub mod models;

// Re-exports
pub use models::*;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full router with shared state and HTTP layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .merge(menu::routes())
        .merge(combos::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    let total_items = state.snapshot().await.catalog().len();
    Json(InfoResponse {
        title: state.service.title.clone(),
        author: state.service.author.clone(),
        description: state.service.description.clone(),
        total_items,
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let total_items = state.snapshot().await.catalog().len();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_items,
    })
}
