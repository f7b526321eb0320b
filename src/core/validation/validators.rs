//! Reusable field validators
//!
//! Each validator is keyed by the wire-level field name so failures map
//! directly to field-level error entries.

/// Validator: text field must not be empty or whitespace-only
pub fn non_empty() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' must not be empty", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must be within an inclusive range
pub fn int_range(
    min: i64,
    max: i64,
) -> impl Fn(&str, i64) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: i64| {
        if value < min || value > max {
            Err(format!(
                "'{}' must be between {} and {} (value: {})",
                field, min, max, value
            ))
        } else {
            Ok(())
        }
    }
}
