use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::items::{Item, ItemInput};

use crate::errors::ApiError;
use crate::routes::AppState;

/// List all items.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.store.list().await;
    info!(count = items.len(), "list items");
    Json(items)
}

/// Get a single item by id. Non-integer path segments never reach this
/// handler; the `Path<u64>` extractor rejects them with a 400.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, ApiError> {
    match state.store.get(id).await {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "Item not found")),
    }
}

/// Create an item. The body is taken as raw JSON so that key presence
/// is what gets validated; a malformed or absent body becomes `None`
/// and fails the same way a missing key does.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Option<Json<serde_json::Value>>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input = ItemInput::from_body(payload.map(|Json(body)| body))?;
    let item = state.store.create(input).await;
    info!(id = item.id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item in full. The payload is validated before existence is
/// checked, so an invalid body is a 400 even for an unknown id.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Option<Json<serde_json::Value>>,
) -> Result<Json<Item>, ApiError> {
    let input = ItemInput::from_body(payload.map(|Json(body)| body))?;
    let item = state.store.update(id, input).await?;
    info!(id, "updated item");
    Ok(Json(item))
}

/// Delete an item by id.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.store.delete(id).await {
        info!(id, "deleted item");
        Ok(Json(serde_json::json!({"message": "Item deleted"})))
    } else {
        Err(ApiError::new(StatusCode::NOT_FOUND, "Item not found"))
    }
}
