//! # API Error Type
//!
//! Unified error type for admin commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Forge Admin                            │
//! │                                                                         │
//! │  Admin UI                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"cmd":"create_customer"}                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Field rules fail? ─── CoreError::Invalid(map) ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Database Error? ─── DbError::NotFound ────────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The UI receives: { code: "VALIDATION_ERROR", message: "...",          │
//! │                     fields: { GST: "Invalid GST format ..." } }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal details (SQL text, corrupt rows) are logged, never returned.

use serde::Serialize;
use std::collections::BTreeMap;

use forge_core::{CoreError, FieldErrors};
use forge_db::DbError;

/// API error returned from admin commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please fix the highlighted fields",
///   "fields": { "companyName": "Company name is required" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed (see `fields`)
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// The request could not be parsed or names an unknown command
    InvalidRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error carrying the per-field messages.
    pub fn invalid_fields(errors: &FieldErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: "Please fix the highlighted fields".to_string(),
            fields: Some(errors.to_messages()),
        }
    }

    /// Creates a validation error for a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError {
            code: ErrorCode::ValidationError,
            message: message.clone(),
            fields: Some(BTreeMap::from([(field.to_string(), message)])),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::field(
                &field,
                format!("{} '{}' already exists", label_for(&field), value),
            ),
            DbError::CheckViolation { message } => {
                tracing::error!("Check constraint violated: {}", message);
                ApiError::new(ErrorCode::ValidationError, "Record rejected by the database")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Corrupt { entity, id, reason } => {
                tracing::error!(%entity, %id, %reason, "Corrupt row");
                ApiError::new(ErrorCode::DatabaseError, "Stored record is unreadable")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Invalid(errors) => ApiError::invalid_fields(&errors),
            CoreError::CustomerNotFound(id) => ApiError::not_found("Customer", &id),
            CoreError::MaterialNotFound(id) => ApiError::not_found("Material", &id),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::invalid_fields(&errors)
    }
}

/// Human label for a wire field name used in duplicate messages.
fn label_for(field: &str) -> &str {
    match field {
        "materialId" => "Material ID",
        other => other,
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ValidationError;

    #[test]
    fn test_serializes_screaming_codes() {
        let json = serde_json::to_value(ApiError::not_found("Customer", "c-1")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Customer not found: c-1");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_field_errors_carry_messages() {
        let mut errors = FieldErrors::new();
        errors.insert("companyName", ValidationError::Required { label: "Company name" });

        let err = ApiError::from(CoreError::Invalid(errors));
        assert_eq!(err.code, ErrorCode::ValidationError);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["fields"]["companyName"], "Company name is required");
    }

    #[test]
    fn test_duplicate_material_id() {
        let err = ApiError::from(DbError::duplicate("materialId", "RM-STEEL01"));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.fields.unwrap()["materialId"],
            "Material ID 'RM-STEEL01' already exists"
        );
    }

    #[test]
    fn test_query_details_hidden() {
        let err = ApiError::from(DbError::QueryFailed("near \"SELEC\": syntax error".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("SELEC"));
    }
}
