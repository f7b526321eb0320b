//! Mapping from flat key-value rows to typed creation inputs
//!
//! Acceptance scenarios describe POS records as tabular rows of strings.
//! This module turns one such row into a [`NewPos`], validating eagerly and
//! reporting every bad field at once. It has no dependency on any test
//! framework; the row is a plain `HashMap`.

use crate::core::entity::{CampusType, NewPos, PosType};
use crate::core::error::{FieldValidationError, ValidationError};
use std::collections::HashMap;

/// Build a creation input from a flat string row.
///
/// Expected keys: `name`, `description`, `type`, `campus`, `street`,
/// `houseNumber`, `postalCode`, `city`. Missing keys, unknown enumeration
/// values, and a non-numeric `postalCode` are reported together as
/// field-level errors.
pub fn new_pos_from_row(row: &HashMap<String, String>) -> Result<NewPos, ValidationError> {
    let mut errors: Vec<FieldValidationError> = Vec::new();

    let mut take = |field: &str| -> Option<String> {
        match row.get(field) {
            Some(value) => Some(value.clone()),
            None => {
                errors.push(FieldValidationError {
                    field: field.to_string(),
                    message: "missing column".to_string(),
                });
                None
            }
        }
    };

    let name = take("name");
    let description = take("description");
    let raw_type = take("type");
    let raw_campus = take("campus");
    let street = take("street");
    let house_number = take("houseNumber");
    let raw_postal_code = take("postalCode");
    let city = take("city");

    let pos_type = raw_type.and_then(|raw| match raw.parse::<PosType>() {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(FieldValidationError {
                field: "type".to_string(),
                message,
            });
            None
        }
    });

    let campus = raw_campus.and_then(|raw| match raw.parse::<CampusType>() {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(FieldValidationError {
                field: "campus".to_string(),
                message,
            });
            None
        }
    });

    let postal_code = raw_postal_code.and_then(|raw| match raw.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldValidationError {
                field: "postalCode".to_string(),
                message: format!("must be an integer (value: '{}')", raw),
            });
            None
        }
    });

    match (
        name,
        description,
        pos_type,
        campus,
        street,
        house_number,
        postal_code,
        city,
    ) {
        (
            Some(name),
            Some(description),
            Some(pos_type),
            Some(campus),
            Some(street),
            Some(house_number),
            Some(postal_code),
            Some(city),
        ) if errors.is_empty() => Ok(NewPos {
            name,
            description,
            pos_type,
            campus,
            street,
            house_number,
            postal_code,
            city,
        }),
        _ => Err(ValidationError::FieldErrors(errors)),
    }
}
