//! # Campus Coffee
//!
//! A catalog service for campus coffee points of sale (POS), exposing batch
//! create, list, and update operations over a REST API.
//!
//! ## Architecture
//!
//! - **Entity model** ([`core::entity`]): the [`Pos`](core::entity::Pos)
//!   record with system-assigned identity and timestamps, plus the closed
//!   `PosType`/`CampusType` enumerations.
//! - **Repository contract** ([`core::repository`]): storage-agnostic trait
//!   for inserting, scanning, and updating records. The shipped backend is
//!   an insertion-ordered in-memory store ([`storage::InMemoryPosRepository`]).
//! - **Service** ([`pos::service::PosService`]): the single authority for
//!   POS lifecycle — validation, identity assignment, timestamping, and
//!   update matching. State reset (`clear()`) is a separate administrative
//!   capability that is never routed over HTTP.
//! - **API layer** ([`server::router`]): thin axum handlers translating
//!   `POST /pos`, `GET /pos`, and `PUT /pos` into service calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use campus_coffee::prelude::*;
//! use std::sync::Arc;
//!
//! let repository = Arc::new(InMemoryPosRepository::new());
//! let service = Arc::new(PosService::new(repository));
//! let app = build_pos_routes(AppState { service });
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod pos;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        entity::{CampusType, NewPos, Pos, PosType, PosUpdate},
        error::{
            CoffeeError, CoffeeResult, ConfigError, ErrorResponse, FieldValidationError,
            PosError, StorageError, ValidationError,
        },
        repository::{CatalogAdmin, PosRepository},
        validation::rows::new_pos_from_row,
    };

    // === Service & API ===
    pub use crate::pos::{handlers::AppState, service::PosService};
    pub use crate::server::router::build_pos_routes;

    // === Storage ===
    pub use crate::storage::InMemoryPosRepository;

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
