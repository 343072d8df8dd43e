use crate::api::combos::handlers::diverse_combos_handler;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/menu/combos", get(diverse_combos_handler))
}
