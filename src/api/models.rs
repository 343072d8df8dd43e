use crate::catalog::{CatalogError, MenuItem};
use crate::combo::{ComboError, SelectedCombo};
use crate::config::ServiceConfig;
use crate::menu::MenuSnapshot;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

pub const MAX_SEARCH_LIMIT: usize = 100;
pub const MAX_COMBO_COUNT: usize = 50;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<RwLock<Arc<MenuSnapshot>>>,
    pub service: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(snapshot: MenuSnapshot, service: ServiceConfig) -> Self {
        Self {
            menu: Arc::new(RwLock::new(Arc::new(snapshot))),
            service: Arc::new(service),
        }
    }

    /// Current snapshot; the lock is released before returning
    pub async fn snapshot(&self) -> Arc<MenuSnapshot> {
        self.menu.read().await.clone()
    }
}

/// Request to add a new menu item
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl AddItemRequest {
    pub fn into_item(self) -> Result<MenuItem, CatalogError> {
        MenuItem::new(self.id, self.name, self.price, self.category)
    }
}

/// Query string for the multi-field search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 || self.limit > MAX_SEARCH_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_SEARCH_LIMIT));
        }
        Ok(())
    }
}

/// Query string for the combos endpoint
#[derive(Debug, Deserialize)]
pub struct ComboQuery {
    #[serde(default = "default_combo_count")]
    pub count: usize,
}

fn default_combo_count() -> usize {
    10
}

impl ComboQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 || self.count > MAX_COMBO_COUNT {
            return Err(format!("count must be between 1 and {}", MAX_COMBO_COUNT));
        }
        Ok(())
    }
}

/// Service information
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub title: String,
    pub author: String,
    pub description: String,
    pub total_items: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_items: usize,
}

/// Filters echoed back by the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub category: Option<String>,
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub filters: SearchFilters,
    pub results: Vec<MenuItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ComboResponse {
    pub criterion: String,
    pub count: usize,
    pub combos: Vec<SelectedCombo>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ComboError> for AppError {
    fn from(err: ComboError) -> Self {
        match err {
            ComboError::NoCombosAvailable => AppError::Internal(err.to_string()),
            ComboError::NoDiverseSelectionPossible => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
