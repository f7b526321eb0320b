//! Router builder for the POS routes

use crate::pos::handlers::{AppState, create_pos, list_pos, update_pos};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the POS routes:
/// - `POST /pos` — batch create
/// - `GET  /pos` — list in insertion order
/// - `PUT  /pos` — batch update
///
/// The catalog reset (`clear()`) is deliberately absent: it stays an
/// in-process administrative call and never reaches the network boundary.
pub fn build_pos_routes(state: AppState) -> Router {
    Router::new()
        .route("/pos", get(list_pos).post(create_pos).put(update_pos))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
