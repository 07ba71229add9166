//! # Domain Types
//!
//! Records and drafts for the two entities Forge Admin manages.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │   CustomerDraft     │ validate   │     Customer        │            │
//! │  │  ─────────────────  │ ────────►  │  ─────────────────  │            │
//! │  │  raw form strings   │ normalize  │  id (UUID)          │            │
//! │  │  creditDays: 30|"30"│            │  creditDays: i64    │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │   MaterialDraft     │ validate   │     Material        │            │
//! │  │  ─────────────────  │ ────────►  │  ─────────────────  │            │
//! │  │  materialId "RM-.." │ normalize  │  id (UUID)          │            │
//! │  │  currentStock       │            │  materialId (fixed) │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every record has:
//! - `id`: UUID v4 - assigned by the system of record, never changes
//! - Business key: (`materialId` for materials) - human-readable
//!
//! Drafts are what a form collects. They are deliberately loose (everything
//! defaults, numbers may arrive as strings) so a half-filled form still
//! deserializes and can be answered with field messages instead of a parse
//! failure.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Credit Terms
// =============================================================================

/// Payment deadline agreed with a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum CreditTerms {
    /// Paid before dispatch.
    #[serde(rename = "Advance")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Advance"))]
    Advance,
    #[serde(rename = "Net 15")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net 15"))]
    Net15,
    #[serde(rename = "Net 30")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net 30"))]
    Net30,
    #[serde(rename = "Net 45")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net 45"))]
    Net45,
    #[serde(rename = "Net 60")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net 60"))]
    Net60,
    #[serde(rename = "Net 90")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net 90"))]
    Net90,
}

impl CreditTerms {
    /// Every accepted value, in the order the form's dropdown lists them.
    pub const ALL: [CreditTerms; 6] = [
        CreditTerms::Advance,
        CreditTerms::Net15,
        CreditTerms::Net30,
        CreditTerms::Net45,
        CreditTerms::Net60,
        CreditTerms::Net90,
    ];

    /// Returns the display label, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CreditTerms::Advance => "Advance",
            CreditTerms::Net15 => "Net 15",
            CreditTerms::Net30 => "Net 30",
            CreditTerms::Net45 => "Net 45",
            CreditTerms::Net60 => "Net 60",
            CreditTerms::Net90 => "Net 90",
        }
    }
}

impl fmt::Display for CreditTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditTerms {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreditTerms::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown credit terms: {s}"))
    }
}

// =============================================================================
// Unit of Measure
// =============================================================================

/// Unit a raw material is counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[default]
    Kg,
    G,
    Ton,
    L,
    Ml,
    Pcs,
    M,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 7] = [
        UnitOfMeasure::Kg,
        UnitOfMeasure::G,
        UnitOfMeasure::Ton,
        UnitOfMeasure::L,
        UnitOfMeasure::Ml,
        UnitOfMeasure::Pcs,
        UnitOfMeasure::M,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Kg => "kg",
            UnitOfMeasure::G => "g",
            UnitOfMeasure::Ton => "ton",
            UnitOfMeasure::L => "l",
            UnitOfMeasure::Ml => "ml",
            UnitOfMeasure::Pcs => "pcs",
            UnitOfMeasure::M => "m",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UnitOfMeasure::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown unit of measure: {s}"))
    }
}

// =============================================================================
// Number Input
// =============================================================================

/// A numeric form field as it arrives from the UI.
///
/// HTML number inputs hand back either a JSON number or the raw text the
/// user typed, so both are accepted and interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// True when the user left the field empty.
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberInput::Text(s) if s.trim().is_empty())
    }

    /// Returns the numeric value, or `None` when the text is not a number.
    pub fn value(&self) -> Option<f64> {
        match self {
            NumberInput::Number(n) => Some(*n).filter(|n| n.is_finite()),
            NumberInput::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Returns the value as an integer, or `None` when it is not a number or
    /// has a fractional part.
    pub fn as_whole(&self) -> Option<i64> {
        self.value()
            .filter(|n| n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(n))
            .map(|n| n as i64)
    }
}

impl From<i64> for NumberInput {
    fn from(n: i64) -> Self {
        NumberInput::Number(n as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        NumberInput::Text(s.to_string())
    }
}

// =============================================================================
// Bank Details
// =============================================================================

/// Where a customer's payments come from. Stored as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub account_holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    /// Indian Financial System Code (branch routing code).
    pub ifsc_code: String,
    pub branch: String,
}

impl BankDetails {
    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        BankDetails {
            account_holder_name: self.account_holder_name.trim().to_string(),
            bank_name: self.bank_name.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
            ifsc_code: self.ifsc_code.trim().to_string(),
            branch: self.branch.trim().to_string(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDraft {
    pub company_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "GST")]
    pub gst: String,
    #[serde(rename = "PAN")]
    pub pan: String,
    #[serde(rename = "TAN")]
    pub tan: String,
    pub commercial_email: String,
    pub credit_terms: Option<CreditTerms>,
    pub credit_days: Option<NumberInput>,
    pub part_numbers: Vec<String>,
    pub bank_details: BankDetails,
}

/// A customer as held by the system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub company_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "GST")]
    pub gst: String,
    #[serde(rename = "PAN")]
    pub pan: String,
    #[serde(rename = "TAN")]
    pub tan: String,
    pub commercial_email: String,
    pub credit_terms: Option<CreditTerms>,
    /// Days of credit, 0 to 90.
    pub credit_days: Option<i64>,
    /// Part numbers this customer orders.
    pub part_numbers: Vec<String>,
    pub bank_details: BankDetails,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Builds a new record from a draft that already passed validation.
    pub fn from_draft(id: impl Into<String>, draft: &CustomerDraft, now: DateTime<Utc>) -> Self {
        Customer {
            id: id.into(),
            company_name: draft.company_name.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            address: draft.address.trim().to_string(),
            gst: draft.gst.trim().to_string(),
            pan: draft.pan.trim().to_string(),
            tan: draft.tan.trim().to_string(),
            commercial_email: draft.commercial_email.trim().to_string(),
            credit_terms: draft.credit_terms,
            credit_days: draft
                .credit_days
                .as_ref()
                .and_then(NumberInput::value)
                .map(|days| days.trunc() as i64),
            part_numbers: draft
                .part_numbers
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            bank_details: draft.bank_details.trimmed(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record replacement from the edit form. Keeps `id` and `created_at`.
    pub fn replaced_by(&self, draft: &CustomerDraft, now: DateTime<Utc>) -> Self {
        Customer {
            created_at: self.created_at,
            ..Customer::from_draft(self.id.clone(), draft, now)
        }
    }
}

impl From<&Customer> for CustomerDraft {
    /// Prefills the edit form from a stored record.
    fn from(c: &Customer) -> Self {
        CustomerDraft {
            company_name: c.company_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            gst: c.gst.clone(),
            pan: c.pan.clone(),
            tan: c.tan.clone(),
            commercial_email: c.commercial_email.clone(),
            credit_terms: c.credit_terms,
            credit_days: c.credit_days.map(NumberInput::from),
            part_numbers: c.part_numbers.clone(),
            bank_details: c.bank_details.clone(),
        }
    }
}

// =============================================================================
// Material
// =============================================================================

/// Material form contents before validation.
///
/// Stock fields keep whatever the number inputs sent; a missing or blank
/// `min_stock_level` means "no minimum".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialDraft {
    pub material_id: String,
    pub name: String,
    pub description: String,
    pub unit: UnitOfMeasure,
    pub current_stock: Option<NumberInput>,
    pub min_stock_level: Option<NumberInput>,
    pub supplier: String,
}

/// A raw material as held by the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Business key, `RM-` prefixed. Fixed once created.
    pub material_id: String,
    pub name: String,
    pub description: Option<String>,
    pub unit: UnitOfMeasure,
    pub current_stock: i64,
    pub min_stock_level: Option<i64>,
    pub supplier: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Material {
    /// Builds a new record from a draft that already passed validation.
    pub fn from_draft(id: impl Into<String>, draft: &MaterialDraft, now: DateTime<Utc>) -> Self {
        Material {
            id: id.into(),
            material_id: draft.material_id.trim().to_string(),
            name: draft.name.trim().to_string(),
            description: non_blank(&draft.description),
            unit: draft.unit,
            current_stock: draft
                .current_stock
                .as_ref()
                .and_then(NumberInput::as_whole)
                .unwrap_or(0),
            min_stock_level: draft.min_stock_level.as_ref().and_then(NumberInput::as_whole),
            supplier: non_blank(&draft.supplier),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record replacement from the edit form.
    ///
    /// Keeps `id`, `created_at`, and `material_id`; whatever material ID the
    /// draft carries is ignored.
    pub fn replaced_by(&self, draft: &MaterialDraft, now: DateTime<Utc>) -> Self {
        Material {
            material_id: self.material_id.clone(),
            created_at: self.created_at,
            ..Material::from_draft(self.id.clone(), draft, now)
        }
    }

    /// True when a minimum level is set and stock has reached or fallen below it.
    pub fn is_low_stock(&self) -> bool {
        self.min_stock_level
            .is_some_and(|min| self.current_stock <= min)
    }
}

impl From<&Material> for MaterialDraft {
    fn from(m: &Material) -> Self {
        MaterialDraft {
            material_id: m.material_id.clone(),
            name: m.name.clone(),
            description: m.description.clone().unwrap_or_default(),
            unit: m.unit,
            current_stock: Some(m.current_stock.into()),
            min_stock_level: m.min_stock_level.map(NumberInput::from),
            supplier: m.supplier.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
