//! Item resource handlers.
//!
//! Path ids are parsed permissively: the leading digits are the id, so
//! `5abc` and `5.7` both address item 5. A segment with no leading digits
//! is treated as an id that does not exist.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::catalog::{Item, ItemDraft};
use crate::http::error::ApiError;
use crate::http::server::AppState;

fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Unwrap the JSON body and apply strict validation when enabled.
fn accept_draft(
    state: &AppState,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<ItemDraft, ApiError> {
    let Json(draft) = payload?;

    if state.strict_validation {
        let invalid = draft.invalid_fields();
        if !invalid.is_empty() {
            return Err(ApiError::Validation(invalid));
        }
    }

    Ok(draft)
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list_all())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;
    Ok(Json(state.store.get_by_id(id)?))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let draft = accept_draft(&state, payload)?;
    let item = state.store.create(draft);

    tracing::info!(item_id = item.id, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;
    let draft = accept_draft(&state, payload)?;
    let item = state.store.update(id, draft)?;

    tracing::info!(item_id = id, "Updated item");
    Ok(Json(item))
}

/// Always 204, whether or not the item existed.
pub async fn delete_item(State(state): State<AppState>, Path(raw_id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&raw_id) {
        if state.store.delete(id) {
            tracing::info!(item_id = id, "Deleted item");
        }
    }
    StatusCode::NO_CONTENT
}
