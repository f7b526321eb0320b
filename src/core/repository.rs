//! Repository and administrative contracts
//!
//! The service is agnostic to the underlying storage mechanism; any backend
//! implementing [`PosRepository`] can be plugged in.

use crate::core::entity::Pos;
use crate::core::error::CoffeeResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Contract for the POS record store.
///
/// Implementations must return records from `find_all` in a stable order:
/// insertion order, unaffected by updates.
#[async_trait]
pub trait PosRepository: Send + Sync {
    /// Persist a fully-formed record. Fails if the id already exists.
    async fn insert(&self, pos: Pos) -> CoffeeResult<Pos>;

    /// All live records in insertion order.
    async fn find_all(&self) -> CoffeeResult<Vec<Pos>>;

    /// Look up a record by id.
    async fn find_by_id(&self, id: &Uuid) -> CoffeeResult<Option<Pos>>;

    /// First record with the given name, in insertion order.
    async fn find_by_name(&self, name: &str) -> CoffeeResult<Option<Pos>>;

    /// Replace the stored record sharing the given record's id. Fails if
    /// absent. The record keeps its position in the scan order.
    async fn update(&self, pos: Pos) -> CoffeeResult<Pos>;

    /// Empty the store.
    async fn delete_all(&self) -> CoffeeResult<()>;
}

/// Administrative capability, scoped separately from the production
/// create/retrieve/update surface.
///
/// `clear()` is a test-isolation primitive invoked in-process by the
/// acceptance harness between scenarios. It is never exposed on the network
/// boundary.
#[async_trait]
pub trait CatalogAdmin: Send + Sync {
    /// Remove all stored records. Idempotent.
    async fn clear(&self) -> CoffeeResult<()>;
}
