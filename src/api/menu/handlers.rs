use crate::api::models::*;
use crate::catalog::{MenuFilter, MenuItem};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn list_items_handler(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let snapshot = state.snapshot().await;
    Json(snapshot.catalog().items().to_vec())
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MenuItem>, AppError> {
    let snapshot = state.snapshot().await;

    snapshot
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Item with ID {} not found", id)))
}

pub async fn items_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<MenuItem>> {
    let snapshot = state.snapshot().await;
    let items = snapshot
        .catalog()
        .by_category(&category)
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}

pub async fn search_items_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    query.validate().map_err(AppError::BadRequest)?;

    let snapshot = state.snapshot().await;
    let filter = MenuFilter {
        name: query.name.clone(),
        category: query.category.clone(),
    };
    let matches = snapshot.catalog().search(&filter);
    let total = matches.len();

    info!(name = ?query.name, category = ?query.category, total, "Searching menu");

    Ok(Json(SearchResponse {
        results: matches.into_iter().take(query.limit).cloned().collect(),
        total,
        filters: SearchFilters {
            name: query.name,
            category: query.category,
            limit: query.limit,
        },
    }))
}

pub async fn add_item_handler(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let item = request.into_item()?;

    // Single writer: the next snapshot is built under the write lock and
    // swapped in whole.
    let total = {
        let mut menu = state.menu.write().await;
        let next = menu.with_item(item.clone())?;
        let total = next.catalog().len();
        *menu = Arc::new(next);
        total
    };

    info!(id = item.id(), category = %item.category(), total, "Item added");

    Ok((StatusCode::CREATED, Json(item)))
}
