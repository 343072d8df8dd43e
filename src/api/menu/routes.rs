use crate::api::menu::handlers::*;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items_handler).post(add_item_handler))
        .route("/items/id/{id}", get(get_item_handler))
        .route("/items/category/{category}", get(items_by_category_handler))
        .route("/items/search", get(search_items_handler))
}
