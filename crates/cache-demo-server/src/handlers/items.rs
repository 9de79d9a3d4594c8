//! Item handlers

use crate::error::AppError;
use crate::extractors::{ItemId, ValidJson};
use crate::AppState;
use axum::{extract::State, Json};
use cache_demo_types::Item;

pub async fn create(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Item>, AppError> {
    let item = state.item_service.create(item).await?;
    Ok(Json(item))
}

pub async fn get(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, AppError> {
    let item = state.item_service.read(id).await?;
    Ok(Json(item))
}
