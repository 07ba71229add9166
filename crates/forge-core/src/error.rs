//! # Error Types
//!
//! Domain-specific error types for forge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  forge-core errors (this file)                                         │
//! │  ├── ValidationError  - One failed rule on one field                   │
//! │  └── CoreError        - Rejected drafts, missing records               │
//! │                                                                         │
//! │  forge-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  forge-admin errors (in app)                                           │
//! │  └── ApiError         - What the admin UI sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → CoreError → ApiError → UI       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Wording
//! The `Display` text of every [`ValidationError`] is shown verbatim next to
//! the form field it belongs to. Screens match on it, so the wording is part
//! of the contract.

use thiserror::Error;

use crate::validation::FieldErrors;

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed rule on a single form field.
///
/// `label` is the human name of the field ("Company name", "GST", ...), not
/// its JSON key. The key lives in [`FieldErrors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{label} is required")]
    Required { label: &'static str },

    /// Value does not match the field's format.
    ///
    /// ```text
    /// InvalidFormat { label: "GST", example: Some("22AAAAA0000A1Z5") }
    ///     → "Invalid GST format (e.g., 22AAAAA0000A1Z5)"
    /// InvalidFormat { label: "email", example: None }
    ///     → "Invalid email format"
    /// ```
    #[error(
        "Invalid {label} format{}",
        .example.map(|e| format!(" (e.g., {e})")).unwrap_or_default()
    )]
    InvalidFormat {
        label: &'static str,
        example: Option<&'static str>,
    },

    /// Value is shorter than the minimum length.
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    /// Numeric value is missing its range or is not a number at all.
    #[error("{label} must be between {min}-{max}")]
    OutOfRange {
        label: &'static str,
        min: i64,
        max: i64,
    },

    /// Count that must not drop below zero.
    #[error("{label} cannot be negative")]
    Negative { label: &'static str },

    /// Count given as text that is not a number, or with a fractional part.
    #[error("{label} must be a whole number")]
    NotWholeNumber { label: &'static str },

    /// Material identifier does not follow the `RM-XXX` scheme.
    #[error("Material ID must be RM- followed by 3-10 uppercase letters or digits")]
    InvalidMaterialId,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business errors.
///
/// These are raised by the command layer around the pure validators and are
/// translated to API errors before they reach the UI.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The draft failed one or more field rules.
    ///
    /// ## User Workflow
    /// ```text
    /// Save (customer form)
    ///      │
    ///      ▼
    /// validate_customer(draft) → { GST: "Invalid GST format ..." }
    ///      │
    ///      ▼
    /// Invalid(FieldErrors)
    ///      │
    ///      ▼
    /// UI shows the message under the GST input, form stays open
    /// ```
    #[error("{0}")]
    Invalid(FieldErrors),

    /// Customer cannot be found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Material cannot be found.
    #[error("Material not found: {0}")]
    MaterialNotFound(String),
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::Invalid(errors)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            label: "Company name",
        };
        assert_eq!(err.to_string(), "Company name is required");

        let err = ValidationError::TooShort {
            label: "Address",
            min: 10,
        };
        assert_eq!(err.to_string(), "Address must be at least 10 characters");

        let err = ValidationError::OutOfRange {
            label: "Credit days",
            min: 0,
            max: 90,
        };
        assert_eq!(err.to_string(), "Credit days must be between 0-90");

        let err = ValidationError::NotWholeNumber {
            label: "Current stock",
        };
        assert_eq!(err.to_string(), "Current stock must be a whole number");
    }

    #[test]
    fn test_invalid_format_with_and_without_example() {
        let err = ValidationError::InvalidFormat {
            label: "GST",
            example: Some("22AAAAA0000A1Z5"),
        };
        assert_eq!(err.to_string(), "Invalid GST format (e.g., 22AAAAA0000A1Z5)");

        let err = ValidationError::InvalidFormat {
            label: "phone number",
            example: None,
        };
        assert_eq!(err.to_string(), "Invalid phone number format");
    }

    #[test]
    fn test_field_errors_convert_to_core_error() {
        let mut errors = FieldErrors::new();
        errors.insert("name", ValidationError::Required { label: "Material name" });

        let core_err: CoreError = errors.into();
        assert!(matches!(core_err, CoreError::Invalid(_)));
        assert_eq!(core_err.to_string(), "name: Material name is required");
    }
}
