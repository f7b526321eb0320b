//! Typed error handling for the POS catalog service
//!
//! This module provides the error hierarchy surfaced to API clients and
//! used throughout the service. Each category maps to a stable error code
//! and an HTTP status, so callers can handle failures specifically rather
//! than matching on message strings.
//!
//! # Error Categories
//!
//! - [`PosError`]: errors related to POS records (not found, id collision)
//! - [`ValidationError`]: malformed or incomplete input
//! - [`StorageError`]: repository backend failures
//! - [`ConfigError`]: configuration parsing and IO failures

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the campus-coffee service
#[derive(Debug)]
pub enum CoffeeError {
    /// POS record errors (not found, id collision)
    Pos(PosError),

    /// Input validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for CoffeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeError::Pos(e) => write!(f, "{}", e),
            CoffeeError::Validation(e) => write!(f, "{}", e),
            CoffeeError::Storage(e) => write!(f, "{}", e),
            CoffeeError::Config(e) => write!(f, "{}", e),
            CoffeeError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CoffeeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoffeeError::Pos(e) => Some(e),
            CoffeeError::Validation(e) => Some(e),
            CoffeeError::Storage(e) => Some(e),
            CoffeeError::Config(e) => Some(e),
            CoffeeError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CoffeeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoffeeError::Pos(e) => e.status_code(),
            CoffeeError::Validation(_) => StatusCode::BAD_REQUEST,
            CoffeeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoffeeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoffeeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CoffeeError::Pos(e) => e.error_code(),
            CoffeeError::Validation(_) => "VALIDATION_ERROR",
            CoffeeError::Storage(_) => "STORAGE_ERROR",
            CoffeeError::Config(_) => "CONFIG_ERROR",
            CoffeeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CoffeeError::Pos(PosError::NotFoundById { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            CoffeeError::Pos(PosError::NotFoundByName { name }) => {
                Some(serde_json::json!({ "name": name }))
            }
            CoffeeError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CoffeeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// POS Errors
// =============================================================================

/// Errors related to POS records
#[derive(Debug)]
pub enum PosError {
    /// No record with the given id
    NotFoundById { id: Uuid },

    /// No record with the given name
    NotFoundByName { name: String },

    /// Insert with a colliding id. The service assigns fresh UUIDs, so this
    /// is an internal invariant violation, not a user-recoverable failure.
    AlreadyExists { id: Uuid },
}

impl fmt::Display for PosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosError::NotFoundById { id } => {
                write!(f, "POS with id '{}' not found", id)
            }
            PosError::NotFoundByName { name } => {
                write!(f, "POS with name '{}' not found", name)
            }
            PosError::AlreadyExists { id } => {
                write!(f, "POS with id '{}' already exists", id)
            }
        }
    }
}

impl std::error::Error for PosError {}

impl PosError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PosError::NotFoundById { .. } => StatusCode::NOT_FOUND,
            PosError::NotFoundByName { .. } => StatusCode::NOT_FOUND,
            PosError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PosError::NotFoundById { .. } => "POS_NOT_FOUND",
            PosError::NotFoundByName { .. } => "POS_NOT_FOUND",
            PosError::AlreadyExists { .. } => "POS_ALREADY_EXISTS",
        }
    }
}

impl From<PosError> for CoffeeError {
    fn from(err: PosError) -> Self {
        CoffeeError::Pos(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Request body did not decode to the expected shape
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CoffeeError {
    fn from(err: ValidationError) -> Self {
        CoffeeError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the storage backend
#[derive(Debug)]
pub enum StorageError {
    /// A lock guarding the store was poisoned by a panicking writer
    LockPoisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { message } => {
                write!(f, "Storage lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for CoffeeError {
    fn from(err: StorageError) -> Self {
        CoffeeError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CoffeeError {
    fn from(err: ConfigError) -> Self {
        CoffeeError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for CoffeeError {
    fn from(err: serde_json::Error) -> Self {
        CoffeeError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for CoffeeError {
    fn from(err: serde_yaml::Error) -> Self {
        CoffeeError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for CoffeeError {
    fn from(err: std::io::Error) -> Self {
        CoffeeError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for campus-coffee operations
pub type CoffeeResult<T> = Result<T, CoffeeError>;

// =============================================================================
// Tests
// =============================================================================
