//! In-memory implementation of the POS repository
//!
//! Records live in an insertion-ordered map behind an `RwLock`, so scans
//! return them in the order they were inserted and conflicting writes to
//! the same record are applied wholly, never interleaved.

use crate::core::entity::Pos;
use crate::core::error::{CoffeeResult, PosError, StorageError};
use crate::core::repository::PosRepository;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Thread-safe in-memory POS store.
#[derive(Clone)]
pub struct InMemoryPosRepository {
    records: Arc<RwLock<IndexMap<Uuid, Pos>>>,
}

impl InMemoryPosRepository {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl Default for InMemoryPosRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PosRepository for InMemoryPosRepository {
    async fn insert(&self, pos: Pos) -> CoffeeResult<Pos> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        if records.contains_key(&pos.id) {
            return Err(PosError::AlreadyExists { id: pos.id }.into());
        }

        records.insert(pos.id, pos.clone());

        Ok(pos)
    }

    async fn find_all(&self) -> CoffeeResult<Vec<Pos>> {
        let records = self
            .records
            .read()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> CoffeeResult<Option<Pos>> {
        let records = self
            .records
            .read()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        Ok(records.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> CoffeeResult<Option<Pos>> {
        let records = self
            .records
            .read()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        Ok(records.values().find(|pos| pos.name == name).cloned())
    }

    async fn update(&self, pos: Pos) -> CoffeeResult<Pos> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        match records.get_mut(&pos.id) {
            // In-place replacement keeps the record's scan position.
            Some(slot) => {
                *slot = pos.clone();
                Ok(pos)
            }
            None => Err(PosError::NotFoundById { id: pos.id }.into()),
        }
    }

    async fn delete_all(&self) -> CoffeeResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StorageError::LockPoisoned {
                message: e.to_string(),
            })?;

        records.clear();

        Ok(())
    }
}
