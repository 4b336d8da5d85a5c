//! Handlers for the dynamic `/api/:resource` CRUD surface.
//!
//! Resource and item identifiers are opaque strings taken verbatim from the
//! URL path. Bodies are read as raw bytes so that an absent body can count
//! as an empty object; anything present must parse as a JSON object.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use store::Item;

use crate::errors::ApiError;
use crate::routes::AppState;

/// GET / — dump the whole store. Debug aid, not part of the CRUD surface.
pub async fn dump_store(State(state): State<AppState>) -> Json<Value> {
    let all = state.store.dump().await;
    Json(serde_json::to_value(all).unwrap_or_default())
}

pub async fn list_items(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    state
        .store
        .list(&resource)
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

pub async fn get_item(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Item>, ApiError> {
    state
        .store
        .get(&resource, &id)
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// The created item and its id are deliberately not echoed back; clients
/// list the collection to observe the result.
pub async fn create_item(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = parse_object(&body)?;
    state.store.create(&resource, payload).await;
    Ok(StatusCode::OK)
}

pub async fn update_item(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = parse_object(&body)?;
    state
        .store
        .update(&resource, &id, payload)
        .await
        .map(|_| StatusCode::OK)
        .map_err(ApiError::mutation)
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete(&resource, &id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(ApiError::mutation)
}

/// An absent body counts as an empty object; a present body must be a JSON
/// object. Rejected bodies leave the store untouched.
fn parse_object(body: &Bytes) -> Result<Item, ApiError> {
    if body.is_empty() {
        return Ok(Item::new());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("body must be a JSON object: {e}")))
}
