//! # Validation Module
//!
//! Field format checks and record validators for Forge Admin.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Format validators (is_valid_*)                               │
//! │  ├── One regex per field type: phone, email, GST, PAN, TAN, RM-ID      │
//! │  └── Total functions: &str → bool, never fail                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record validators (validate_customer, validate_material)     │
//! │  ├── Run every rule for every field, no short-circuit                  │
//! │  └── Collect failures into FieldErrors (field key → message)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── UNIQUE material_id                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty [`FieldErrors`] means the draft may be submitted. A non-empty one
//! blocks submission and its messages are shown next to the offending inputs.
//!
//! ## Usage
//! ```rust
//! use forge_core::types::CustomerDraft;
//! use forge_core::validation::{is_valid_gst, validate_customer};
//!
//! assert!(is_valid_gst("22AAAAA0000A1Z5"));
//!
//! let errors = validate_customer(&CustomerDraft::default());
//! assert_eq!(errors.message("companyName").as_deref(), Some("Company name is required"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;
use crate::types::{CustomerDraft, MaterialDraft, NumberInput};
use crate::{MAX_CREDIT_DAYS, MIN_ADDRESS_LEN};

// =============================================================================
// Patterns
// =============================================================================

// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+[0-9]{1,3}[- ]?)?[0-9]{10}$").expect("phone pattern"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));

static GST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$").expect("GST pattern")
});

static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").expect("PAN pattern"));

static TAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}[0-9]{5}[A-Z]{1}$").expect("TAN pattern"));

static MATERIAL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^RM-[A-Z0-9]{3,10}$").expect("material ID pattern"));

// =============================================================================
// Format Validators
// =============================================================================

/// Checks a phone number: optional `+` country code of 1-3 digits (with an
/// optional `-` or space after it), then exactly 10 digits.
///
/// Any country code is accepted, not just `+91`.
///
/// ## Example
/// ```rust
/// use forge_core::validation::is_valid_phone;
///
/// assert!(is_valid_phone("9876543210"));
/// assert!(is_valid_phone("+91 9876543210"));
/// assert!(is_valid_phone("+1-9876543210"));
/// assert!(!is_valid_phone("98765 43210"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Checks an email address: non-space run, `@`, non-space run, `.`, non-space run.
///
/// ## Example
/// ```rust
/// use forge_core::validation::is_valid_email;
///
/// assert!(is_valid_email("accounts@acme.in"));
/// assert!(!is_valid_email("accounts@acme"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks a 15-character GST identification number.
///
/// ## Layout
/// ```text
///  22  AAAAA  0000  A   1   Z   5
///  │     │     │    │   │   │   └─ checksum character (0-9, A-Z)
///  │     │     │    │   │   └───── literal Z
///  │     │     │    │   └───────── entity number (1-9, A-Z)
///  │     │     │    └───────────── PAN check letter
///  │     └─────┴────────────────── embedded PAN
///  └────────────────────────────── state code
/// ```
pub fn is_valid_gst(gst: &str) -> bool {
    GST_REGEX.is_match(gst)
}

/// Checks a 10-character PAN: 5 letters, 4 digits, 1 letter.
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(pan)
}

/// Checks a 10-character TAN: 4 letters, 5 digits, 1 letter.
pub fn is_valid_tan(tan: &str) -> bool {
    TAN_REGEX.is_match(tan)
}

/// Checks a material identifier: `RM-` then 3-10 uppercase letters or digits.
///
/// ## Example
/// ```rust
/// use forge_core::validation::is_valid_material_id;
///
/// assert!(is_valid_material_id("RM-STEEL01"));
/// assert!(!is_valid_material_id("rm-steel01"));
/// assert!(!is_valid_material_id("RM-AB"));
/// ```
pub fn is_valid_material_id(material_id: &str) -> bool {
    MATERIAL_ID_REGEX.is_match(material_id)
}

// =============================================================================
// Field Errors
// =============================================================================

/// Field key → failed rule, for one draft.
///
/// Keys are the JSON field names the form uses (`companyName`, `GST`, ...).
/// Serializes as a flat `{ key: message }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records a failure. A later failure on the same field replaces the earlier one.
    pub fn insert(&mut self, field: &'static str, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// The message shown under `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Field keys in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Owned `key → message` map, as handed to the UI.
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, err)| (field.to_string(), err.to_string()))
            .collect()
    }

    /// `Ok(())` when nothing failed, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {err}")?;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, err) in self.iter() {
            map.serialize_entry(field, &err.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Record Validators
// =============================================================================

/// Whether the form is creating a record or editing an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Validates a customer draft.
///
/// ## Rules
/// ```text
/// companyName      required
/// phone            required, phone format
/// email            required, email format
/// address          required, >= 10 characters
/// GST / PAN / TAN  required, respective format
/// commercialEmail  required, email format
/// creditDays       optional; if given, a number in 0..=90
/// ```
///
/// Every rule runs; all failing fields are reported.
pub fn validate_customer(draft: &CustomerDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.company_name.trim().is_empty() {
        errors.insert(
            "companyName",
            ValidationError::Required {
                label: "Company name",
            },
        );
    }

    check_format(&mut errors, "phone", &draft.phone, "Phone number", is_valid_phone, "phone number", None);
    check_format(&mut errors, "email", &draft.email, "Email", is_valid_email, "email", None);

    let address = draft.address.trim();
    if address.is_empty() {
        errors.insert("address", ValidationError::Required { label: "Address" });
    } else if address.chars().count() < MIN_ADDRESS_LEN {
        errors.insert(
            "address",
            ValidationError::TooShort {
                label: "Address",
                min: MIN_ADDRESS_LEN,
            },
        );
    }

    check_format(&mut errors, "GST", &draft.gst, "GST number", is_valid_gst, "GST", Some("22AAAAA0000A1Z5"));
    check_format(&mut errors, "PAN", &draft.pan, "PAN number", is_valid_pan, "PAN", Some("ABCDE1234F"));
    check_format(&mut errors, "TAN", &draft.tan, "TAN number", is_valid_tan, "TAN", Some("ABCD12345E"));
    check_format(
        &mut errors,
        "commercialEmail",
        &draft.commercial_email,
        "Commercial email",
        is_valid_email,
        "commercial email",
        None,
    );

    if let Some(days) = draft.credit_days.as_ref().filter(|d| !d.is_blank()) {
        let in_range = days
            .value()
            .is_some_and(|d| (0.0..=MAX_CREDIT_DAYS as f64).contains(&d));
        if !in_range {
            errors.insert(
                "creditDays",
                ValidationError::OutOfRange {
                    label: "Credit days",
                    min: 0,
                    max: MAX_CREDIT_DAYS,
                },
            );
        }
    }

    errors
}

/// Validates a material draft.
///
/// ## Rules
/// ```text
/// materialId     RM- format (Create mode only; fixed once the record exists)
/// name           required
/// currentStock   required, whole number >= 0
/// minStockLevel  whole number >= 0 when given (blank means none)
/// ```
pub fn validate_material(draft: &MaterialDraft, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if mode == FormMode::Create && !is_valid_material_id(draft.material_id.trim()) {
        errors.insert("materialId", ValidationError::InvalidMaterialId);
    }

    if draft.name.trim().is_empty() {
        errors.insert(
            "name",
            ValidationError::Required {
                label: "Material name",
            },
        );
    }

    match draft.current_stock.as_ref().filter(|n| !n.is_blank()) {
        Some(stock) => check_count(&mut errors, "currentStock", stock, "Current stock"),
        None => errors.insert(
            "currentStock",
            ValidationError::Required {
                label: "Current stock",
            },
        ),
    }

    if let Some(min) = draft.min_stock_level.as_ref().filter(|n| !n.is_blank()) {
        check_count(&mut errors, "minStockLevel", min, "Minimum stock level");
    }

    errors
}

/// Stock counts must be non-negative whole numbers.
fn check_count(
    errors: &mut FieldErrors,
    field: &'static str,
    input: &NumberInput,
    label: &'static str,
) {
    match input.value() {
        None => errors.insert(field, ValidationError::NotWholeNumber { label }),
        Some(n) if n < 0.0 => errors.insert(field, ValidationError::Negative { label }),
        Some(_) if input.as_whole().is_none() => {
            errors.insert(field, ValidationError::NotWholeNumber { label })
        }
        Some(_) => {}
    }
}

/// Required-then-format check shared by the string fields of a customer.
fn check_format(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    required_label: &'static str,
    is_valid: fn(&str) -> bool,
    format_label: &'static str,
    example: Option<&'static str>,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(
            field,
            ValidationError::Required {
                label: required_label,
            },
        );
    } else if !is_valid(value) {
        errors.insert(
            field,
            ValidationError::InvalidFormat {
                label: format_label,
                example,
            },
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreditTerms;

    fn valid_customer() -> CustomerDraft {
        CustomerDraft {
            company_name: "Acme Forgings Pvt Ltd".to_string(),
            phone: "9876543210".to_string(),
            email: "a@b.com".to_string(),
            address: "1234567890".to_string(),
            gst: "22AAAAA0000A1Z5".to_string(),
            pan: "ABCDE1234F".to_string(),
            tan: "ABCD12345E".to_string(),
            commercial_email: "c@d.com".to_string(),
            credit_terms: Some(CreditTerms::Net30),
            credit_days: Some(NumberInput::from(30)),
            ..CustomerDraft::default()
        }
    }

    fn valid_material() -> MaterialDraft {
        MaterialDraft {
            material_id: "RM-ABC".to_string(),
            name: "Steel".to_string(),
            current_stock: Some(NumberInput::from(10)),
            min_stock_level: Some(NumberInput::from(0)),
            ..MaterialDraft::default()
        }
    }

    #[test]
    fn test_phone_format() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("+91-9876543210"));
        assert!(is_valid_phone("+91 9876543210"));
        assert!(is_valid_phone("+1 9876543210"));
        assert!(is_valid_phone("+123-9876543210"));

        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("+1234 9876543210"));
        assert!(!is_valid_phone("91-9876543210"));
        assert!(!is_valid_phone("+91  9876543210"));
        assert!(!is_valid_phone("98765abcde"));
        // Arabic-Indic digits are not phone digits.
        assert!(!is_valid_phone("٩٨٧٦٥٤٣٢١٠"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.co.in"));

        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_gst_format() {
        assert!(is_valid_gst("22AAAAA0000A1Z5"));
        assert!(is_valid_gst("27ABCDE1234FAZB"));

        assert!(!is_valid_gst("bad"));
        assert!(!is_valid_gst("22AAAAA0000A0Z5")); // entity number cannot be 0
        assert!(!is_valid_gst("22AAAAA0000A1X5")); // 14th char must be Z
        assert!(!is_valid_gst("22aaaaa0000a1z5"));
        assert!(!is_valid_gst("22AAAAA0000A1Z5 "));
    }

    #[test]
    fn test_pan_and_tan_format() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("ABCD1234F"));
        assert!(!is_valid_pan("abcde1234f"));

        assert!(is_valid_tan("ABCD12345E"));
        assert!(!is_valid_tan("ABCDE1234F"));
        assert!(!is_valid_tan("ABC123456E"));
    }

    #[test]
    fn test_material_id_format() {
        assert!(is_valid_material_id("RM-ABC"));
        assert!(is_valid_material_id("RM-STEEL01"));
        assert!(is_valid_material_id("RM-1234567890"));

        assert!(!is_valid_material_id("RM-AB"));
        assert!(!is_valid_material_id("RM-12345678901"));
        assert!(!is_valid_material_id("rm-ABC"));
        assert!(!is_valid_material_id("RM-abc"));
        assert!(!is_valid_material_id("RMABC"));
        assert!(!is_valid_material_id(""));
    }

    #[test]
    fn test_valid_customer_has_no_errors() {
        assert!(validate_customer(&valid_customer()).is_empty());
    }

    #[test]
    fn test_missing_company_name_only() {
        let draft = CustomerDraft {
            company_name: String::new(),
            ..valid_customer()
        };
        let errors = validate_customer(&draft);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("companyName").as_deref(),
            Some("Company name is required")
        );
    }

    #[test]
    fn test_bad_gst_only() {
        let draft = CustomerDraft {
            gst: "bad".to_string(),
            ..valid_customer()
        };
        let errors = validate_customer(&draft);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("GST").as_deref(),
            Some("Invalid GST format (e.g., 22AAAAA0000A1Z5)")
        );
    }

    #[test]
    fn test_credit_days_out_of_range() {
        for days in [NumberInput::from(95), NumberInput::from(-1), NumberInput::from("abc")] {
            let draft = CustomerDraft {
                credit_days: Some(days),
                ..valid_customer()
            };
            let errors = validate_customer(&draft);
            assert_eq!(
                errors.message("creditDays").as_deref(),
                Some("Credit days must be between 0-90")
            );
        }
    }

    #[test]
    fn test_credit_days_boundaries_and_blank() {
        for days in [
            Some(NumberInput::from(0)),
            Some(NumberInput::from(90)),
            Some(NumberInput::from("")),
            None,
        ] {
            let draft = CustomerDraft {
                credit_days: days,
                ..valid_customer()
            };
            assert!(!validate_customer(&draft).contains("creditDays"));
        }
    }

    #[test]
    fn test_address_length_boundary() {
        let ok = CustomerDraft {
            address: "1234567890".to_string(),
            ..valid_customer()
        };
        assert!(validate_customer(&ok).is_empty());

        let short = CustomerDraft {
            address: "123456789".to_string(),
            ..valid_customer()
        };
        let errors = validate_customer(&short);
        assert_eq!(
            errors.message("address").as_deref(),
            Some("Address must be at least 10 characters")
        );
    }

    #[test]
    fn test_empty_customer_reports_every_required_field() {
        let errors = validate_customer(&CustomerDraft::default());
        let fields: Vec<_> = errors.fields().collect();

        assert_eq!(
            fields,
            vec![
                "GST",
                "PAN",
                "TAN",
                "address",
                "commercialEmail",
                "companyName",
                "email",
                "phone"
            ]
        );
        assert_eq!(errors.message("phone").as_deref(), Some("Phone number is required"));
        assert_eq!(errors.message("TAN").as_deref(), Some("TAN number is required"));
    }

    #[test]
    fn test_format_messages_per_field() {
        let draft = CustomerDraft {
            phone: "12345".to_string(),
            email: "nope".to_string(),
            pan: "12345ABCDE".to_string(),
            tan: "ABCDE1234F".to_string(),
            commercial_email: "sales@".to_string(),
            ..valid_customer()
        };
        let errors = validate_customer(&draft);

        assert_eq!(errors.message("phone").as_deref(), Some("Invalid phone number format"));
        assert_eq!(errors.message("email").as_deref(), Some("Invalid email format"));
        assert_eq!(
            errors.message("PAN").as_deref(),
            Some("Invalid PAN format (e.g., ABCDE1234F)")
        );
        assert_eq!(
            errors.message("TAN").as_deref(),
            Some("Invalid TAN format (e.g., ABCD12345E)")
        );
        assert_eq!(
            errors.message("commercialEmail").as_deref(),
            Some("Invalid commercial email format")
        );
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_customer_validation_is_idempotent() {
        let draft = CustomerDraft {
            gst: "bad".to_string(),
            address: "short".to_string(),
            ..CustomerDraft::default()
        };
        assert_eq!(validate_customer(&draft), validate_customer(&draft));
    }

    #[test]
    fn test_valid_material_has_no_errors() {
        assert!(validate_material(&valid_material(), FormMode::Create).is_empty());
    }

    #[test]
    fn test_two_character_material_suffix_is_rejected() {
        let draft = MaterialDraft {
            material_id: "RM-AB".to_string(),
            ..valid_material()
        };
        let errors = validate_material(&draft, FormMode::Create);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["materialId"]);
    }

    #[test]
    fn test_bad_material_reports_id_name_and_stock() {
        let draft = MaterialDraft {
            material_id: "rm-1".to_string(),
            name: String::new(),
            current_stock: Some(NumberInput::from(-5)),
            min_stock_level: Some(NumberInput::from(0)),
            ..MaterialDraft::default()
        };
        let errors = validate_material(&draft, FormMode::Create);

        assert_eq!(errors.len(), 3);
        assert!(errors.contains("materialId"));
        assert_eq!(errors.message("name").as_deref(), Some("Material name is required"));
        assert_eq!(
            errors.message("currentStock").as_deref(),
            Some("Current stock cannot be negative")
        );
    }

    #[test]
    fn test_missing_material_id_counts_as_malformed() {
        let draft = MaterialDraft {
            material_id: String::new(),
            ..valid_material()
        };
        let errors = validate_material(&draft, FormMode::Create);
        assert_eq!(errors.get("materialId"), Some(&ValidationError::InvalidMaterialId));
    }

    #[test]
    fn test_edit_mode_skips_material_id() {
        let draft = MaterialDraft {
            material_id: "legacy-id".to_string(),
            ..valid_material()
        };
        assert!(validate_material(&draft, FormMode::Edit).is_empty());
    }

    #[test]
    fn test_negative_min_stock_level() {
        let draft = MaterialDraft {
            min_stock_level: Some(NumberInput::from(-1)),
            ..valid_material()
        };
        let errors = validate_material(&draft, FormMode::Create);
        assert_eq!(
            errors.message("minStockLevel").as_deref(),
            Some("Minimum stock level cannot be negative")
        );
    }

    #[test]
    fn test_stock_given_as_text() {
        let draft = MaterialDraft {
            current_stock: Some(NumberInput::from("5")),
            min_stock_level: Some(NumberInput::from(" 2 ")),
            ..valid_material()
        };
        assert!(validate_material(&draft, FormMode::Create).is_empty());
    }

    #[test]
    fn test_blank_min_stock_level_is_absent() {
        let draft = MaterialDraft {
            min_stock_level: Some(NumberInput::from("")),
            ..valid_material()
        };
        assert!(validate_material(&draft, FormMode::Create).is_empty());

        let draft = MaterialDraft {
            min_stock_level: None,
            ..valid_material()
        };
        assert!(validate_material(&draft, FormMode::Create).is_empty());
    }

    #[test]
    fn test_missing_current_stock() {
        for stock in [None, Some(NumberInput::from("  "))] {
            let draft = MaterialDraft {
                current_stock: stock,
                ..valid_material()
            };
            let errors = validate_material(&draft, FormMode::Create);
            assert_eq!(
                errors.message("currentStock").as_deref(),
                Some("Current stock is required")
            );
        }
    }

    #[test]
    fn test_stock_must_be_whole_number() {
        let draft = MaterialDraft {
            current_stock: Some(NumberInput::Number(2.5)),
            min_stock_level: Some(NumberInput::from("abc")),
            ..valid_material()
        };
        let errors = validate_material(&draft, FormMode::Create);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message("currentStock").as_deref(),
            Some("Current stock must be a whole number")
        );
        assert_eq!(
            errors.message("minStockLevel").as_deref(),
            Some("Minimum stock level must be a whole number")
        );

        let draft = MaterialDraft {
            current_stock: Some(NumberInput::from("-1.5")),
            ..valid_material()
        };
        assert_eq!(
            validate_material(&draft, FormMode::Create)
                .message("currentStock")
                .as_deref(),
            Some("Current stock cannot be negative")
        );
    }

    #[test]
    fn test_padded_customer_fields_pass() {
        let draft = CustomerDraft {
            phone: " 9876543210 ".to_string(),
            email: "  sales@acme.in".to_string(),
            gst: " 27AAPFU0939F1ZV ".to_string(),
            pan: "AAPFU0939F  ".to_string(),
            tan: "\tPNEA12345B".to_string(),
            ..valid_customer()
        };
        assert!(validate_customer(&draft).is_empty());
    }

    #[test]
    fn test_field_errors_serialize_as_flat_messages() {
        let errors = validate_customer(&CustomerDraft {
            gst: "bad".to_string(),
            ..valid_customer()
        });
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "GST": "Invalid GST format (e.g., 22AAAAA0000A1Z5)" })
        );
        assert!(errors.into_result().is_err());
    }
}
