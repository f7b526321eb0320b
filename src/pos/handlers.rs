//! HTTP handlers for POS operations
//!
//! Handlers are a thin translation layer: decode the batch payload, call
//! the service, encode the result. Bodies are decoded from a raw JSON value
//! so that unknown enumeration members and missing fields surface as the
//! service's structured validation error rather than the extractor's
//! default rejection.

use crate::core::entity::{NewPos, Pos, PosUpdate};
use crate::core::error::CoffeeError;
use crate::pos::service::PosService;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PosService>,
}

/// GET /pos — list all records in insertion order
pub async fn list_pos(State(state): State<AppState>) -> Result<Json<Vec<Pos>>, CoffeeError> {
    let records = state.service.retrieve().await?;
    Ok(Json(records))
}

/// POST /pos — batch create
pub async fn create_pos(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Vec<Pos>>), CoffeeError> {
    let inputs: Vec<NewPos> = serde_json::from_value(payload)?;
    let created = state.service.create(inputs).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /pos — batch update
pub async fn update_pos(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<Pos>>, CoffeeError> {
    let updates: Vec<PosUpdate> = serde_json::from_value(payload)?;
    let updated = state.service.update(updates).await?;
    Ok(Json(updated))
}
