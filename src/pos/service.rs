//! POS service — the single authority for POS lifecycle
//!
//! The service owns identity assignment and timestamping, validates every
//! input before any state changes, and enforces the update-matching
//! semantics. Batches are atomic with respect to observable state: a bad
//! element rejects the whole batch before anything is written.

use crate::core::entity::{NewPos, Pos, PosUpdate};
use crate::core::error::{CoffeeResult, FieldValidationError, PosError, ValidationError};
use crate::core::repository::{CatalogAdmin, PosRepository};
use crate::core::validation::validators::{int_range, non_empty};
use async_trait::async_trait;
use std::sync::Arc;

/// Orchestrates create/retrieve/update over a [`PosRepository`].
#[derive(Clone)]
pub struct PosService {
    repository: Arc<dyn PosRepository>,
}

impl PosService {
    pub fn new(repository: Arc<dyn PosRepository>) -> Self {
        Self { repository }
    }

    /// Create a batch of POS records.
    ///
    /// Every input is validated before the first insert, then each record
    /// gets a fresh id and `created_at = updated_at = now` and is persisted
    /// in input order. The result preserves input order and length.
    pub async fn create(&self, inputs: Vec<NewPos>) -> CoffeeResult<Vec<Pos>> {
        for input in &inputs {
            validate_pos_fields(
                &input.name,
                &input.street,
                &input.house_number,
                &input.city,
                input.postal_code,
            )?;
        }

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let pos = Pos::new(input);
            let stored = self.repository.insert(pos).await?;
            created.push(stored);
        }

        tracing::debug!(count = created.len(), "created POS batch");
        Ok(created)
    }

    /// All stored records, in insertion order.
    pub async fn retrieve(&self) -> CoffeeResult<Vec<Pos>> {
        self.repository.find_all().await
    }

    /// Update a batch of POS records.
    ///
    /// A payload carrying an `id` matches by id; otherwise the first record
    /// with the same `name` (in insertion order) is the target. All targets
    /// are resolved before anything is mutated, so a missing target leaves
    /// the catalog unchanged. `id` and `created_at` are preserved; every
    /// other field is replaced and `updated_at` refreshed.
    pub async fn update(&self, updates: Vec<PosUpdate>) -> CoffeeResult<Vec<Pos>> {
        for update in &updates {
            validate_pos_fields(
                &update.name,
                &update.street,
                &update.house_number,
                &update.city,
                update.postal_code,
            )?;
        }

        let mut resolved: Vec<(Pos, PosUpdate)> = Vec::with_capacity(updates.len());
        for update in updates {
            let existing = match update.id {
                Some(id) => self
                    .repository
                    .find_by_id(&id)
                    .await?
                    .ok_or(PosError::NotFoundById { id })?,
                None => self
                    .repository
                    .find_by_name(&update.name)
                    .await?
                    .ok_or_else(|| PosError::NotFoundByName {
                        name: update.name.clone(),
                    })?,
            };
            resolved.push((existing, update));
        }

        let mut updated = Vec::with_capacity(resolved.len());
        for (mut existing, update) in resolved {
            existing.apply(update);
            let stored = self.repository.update(existing).await?;
            updated.push(stored);
        }

        tracing::debug!(count = updated.len(), "updated POS batch");
        Ok(updated)
    }
}

#[async_trait]
impl CatalogAdmin for PosService {
    async fn clear(&self) -> CoffeeResult<()> {
        tracing::debug!("clearing POS catalog");
        self.repository.delete_all().await
    }
}

/// Field-level validation shared by creation and update inputs.
fn validate_pos_fields(
    name: &str,
    street: &str,
    house_number: &str,
    city: &str,
    postal_code: u32,
) -> Result<(), ValidationError> {
    let text = non_empty();
    let postal = int_range(10_000, 99_999);
    let mut errors: Vec<FieldValidationError> = Vec::new();

    for (field, value) in [
        ("name", name),
        ("street", street),
        ("houseNumber", house_number),
        ("city", city),
    ] {
        if let Err(message) = text(field, value) {
            errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    }

    if let Err(message) = postal("postalCode", i64::from(postal_code)) {
        errors.push(FieldValidationError {
            field: "postalCode".to_string(),
            message,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_fields() {
        assert!(validate_pos_fields("Glashaus", "Universitaetsstrasse", "30", "Bayreuth", 95447).is_ok());
    }

    #[test]
    fn test_validate_collects_every_bad_field() {
        let err = validate_pos_fields("", "Universitaetsstrasse", " ", "Bayreuth", 999).unwrap_err();
        match err {
            ValidationError::FieldErrors(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "houseNumber", "postalCode"]);
            }
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }
}
