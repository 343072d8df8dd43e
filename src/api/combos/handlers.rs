use crate::api::models::*;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

const CRITERION: &str = "diversity (different categories), no item repeated across combos";

pub async fn diverse_combos_handler(
    State(state): State<AppState>,
    Query(query): Query<ComboQuery>,
) -> Result<Json<ComboResponse>, AppError> {
    query.validate().map_err(AppError::BadRequest)?;

    let snapshot = state.snapshot().await;
    let selection = snapshot.combos().select_diverse(query.count)?;

    info!(
        requested = query.count,
        selected = selection.count(),
        ranked = snapshot.combos().len(),
        "Selected diverse combos"
    );

    Ok(Json(ComboResponse {
        criterion: CRITERION.to_string(),
        count: selection.count(),
        combos: selection.combos,
    }))
}
