//! Input validation
//!
//! Field validators used by the service, plus the mapping from flat
//! key-value rows (tabular scenario fixtures) to typed creation inputs.

pub mod rows;
pub mod validators;
