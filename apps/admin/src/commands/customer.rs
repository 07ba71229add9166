//! # Customer Commands
//!
//! Commands behind the customer list and the add/edit customer form.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Customer Save Flow                                   │
//! │                                                                         │
//! │  Form submit                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cmd":"create_customer","args":{"draft":{...}}}                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_customer(draft) ── errors? ──► VALIDATION_ERROR + fields      │
//! │       │ (empty map)                                                     │
//! │       ▼                                                                 │
//! │  Customer::from_draft (trim, drop blank part numbers)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  customers().insert ──► returns the stored Customer                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form never writes a record that fails validation; the UI can call
//! `validate_customer` first to highlight fields as the user types.

use chrono::Utc;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use forge_core::search::filter_customers;
use forge_core::validation;
use forge_core::{Customer, CustomerDraft};
use forge_db::generate_id;

/// Lists customers, optionally filtered by a search term.
///
/// The term matches company name, email, phone, GST, PAN, and part numbers
/// (case-insensitive). A blank term returns every customer.
pub async fn list_customers(
    db: &DbState,
    query: Option<String>,
) -> Result<Vec<Customer>, ApiError> {
    let start = Instant::now();
    let query = query.unwrap_or_default();

    let all = db.inner().customers().list().await?;
    let customers: Vec<Customer> = filter_customers(&all, &query)
        .into_iter()
        .cloned()
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = customers.len(),
        query = %query,
        "list_customers complete"
    );
    Ok(customers)
}

/// Gets a single customer by id.
pub async fn get_customer(db: &DbState, id: String) -> Result<Customer, ApiError> {
    debug!(id = %id, "get_customer command");
    let customer = db
        .inner()
        .customers()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Customer", &id))?;
    Ok(customer)
}

/// Runs the customer rules without saving.
///
/// ## Returns
/// Field name → message; empty when the draft is valid.
pub async fn validate_customer(draft: CustomerDraft) -> Result<BTreeMap<String, String>, ApiError> {
    Ok(validation::validate_customer(&draft).to_messages())
}

/// Validates and stores a new customer.
pub async fn create_customer(db: &DbState, draft: CustomerDraft) -> Result<Customer, ApiError> {
    let errors = validation::validate_customer(&draft);
    if !errors.is_empty() {
        debug!(fields = errors.len(), "create_customer rejected");
        return Err(ApiError::invalid_fields(&errors));
    }

    let customer = Customer::from_draft(generate_id(), &draft, Utc::now());
    db.inner().customers().insert(&customer).await?;

    info!(id = %customer.id, company = %customer.company_name, "Customer created");
    Ok(customer)
}

/// Validates the draft and replaces the stored customer with it.
///
/// Id and creation time are kept; everything else comes from the draft.
pub async fn update_customer(
    db: &DbState,
    id: String,
    draft: CustomerDraft,
) -> Result<Customer, ApiError> {
    validation::validate_customer(&draft).into_result()?;

    let existing = get_customer(db, id).await?;
    let customer = existing.replaced_by(&draft, Utc::now());
    db.inner().customers().update(&customer).await?;

    info!(id = %customer.id, "Customer updated");
    Ok(customer)
}

/// Deletes a customer permanently.
pub async fn delete_customer(db: &DbState, id: String) -> Result<(), ApiError> {
    db.inner().customers().delete(&id).await?;
    info!(id = %id, "Customer deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use forge_core::{CreditTerms, NumberInput};
    use forge_db::{Database, DbConfig};

    async fn setup() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn draft(company: &str) -> CustomerDraft {
        CustomerDraft {
            company_name: company.to_string(),
            phone: "+91 9876543210".to_string(),
            email: "sales@acme.in".to_string(),
            address: "Plot 12, MIDC Bhosari, Pune".to_string(),
            gst: "27AAPFU0939F1ZV".to_string(),
            pan: "AAPFU0939F".to_string(),
            tan: "PNEA12345B".to_string(),
            commercial_email: "accounts@acme.in".to_string(),
            credit_terms: Some(CreditTerms::Net30),
            credit_days: Some(NumberInput::from(30)),
            part_numbers: vec!["PN-100".to_string(), "  ".to_string()],
            ..CustomerDraft::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = setup().await;
        let created = create_customer(&db, draft("  Acme Forgings ")).await.unwrap();

        assert_eq!(created.company_name, "Acme Forgings");
        assert_eq!(created.part_numbers, vec!["PN-100"]);

        let loaded = get_customer(&db, created.id.clone()).await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let db = setup().await;
        let mut bad = draft("Acme Forgings");
        bad.gst = "bad".to_string();

        let err = create_customer(&db, bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let fields = err.fields.unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["GST"], "Invalid GST format (e.g., 22AAAAA0000A1Z5)");

        assert!(list_customers(&db, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_padded_fields_stored_trimmed() {
        let db = setup().await;
        let mut padded = draft("Acme Forgings");
        padded.phone = " 9876543210 ".to_string();
        padded.gst = " 27AAPFU0939F1ZV".to_string();
        padded.commercial_email = "accounts@acme.in  ".to_string();

        assert!(validate_customer(padded.clone()).await.unwrap().is_empty());

        let created = create_customer(&db, padded).await.unwrap();
        assert_eq!(created.phone, "9876543210");
        assert_eq!(created.gst, "27AAPFU0939F1ZV");
        assert_eq!(created.commercial_email, "accounts@acme.in");

        let loaded = get_customer(&db, created.id.clone()).await.unwrap();
        assert_eq!(loaded.phone, "9876543210");
    }

    #[tokio::test]
    async fn test_validate_only() {
        let valid = validate_customer(draft("Acme Forgings")).await.unwrap();
        assert!(valid.is_empty());

        let mut bad = draft("");
        bad.credit_days = Some(NumberInput::from(95));
        let errors = validate_customer(bad).await.unwrap();
        assert_eq!(errors["companyName"], "Company name is required");
        assert_eq!(errors["creditDays"], "Credit days must be between 0-90");
    }

    #[tokio::test]
    async fn test_list_with_query() {
        let db = setup().await;
        create_customer(&db, draft("Acme Forgings")).await.unwrap();
        let mut other = draft("Bharat Castings");
        other.part_numbers = vec!["BC-778".to_string()];
        create_customer(&db, other).await.unwrap();

        let all = list_customers(&db, Some("  ".to_string())).await.unwrap();
        assert_eq!(all.len(), 2);

        let hits = list_customers(&db, Some("bc-77".to_string())).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Bharat Castings");
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let db = setup().await;
        let created = create_customer(&db, draft("Acme Forgings")).await.unwrap();

        let mut edited = draft("Acme Forgings Pvt Ltd");
        edited.phone = "+91-9123456780".to_string();
        edited.part_numbers = Vec::new();
        edited.credit_terms = None;
        edited.credit_days = None;

        let updated = update_customer(&db, created.id.clone(), edited).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.company_name, "Acme Forgings Pvt Ltd");
        assert_eq!(updated.phone, "+91-9123456780");
        assert!(updated.part_numbers.is_empty());
        assert_eq!(updated.credit_days, None);

        let loaded = get_customer(&db, created.id).await.unwrap();
        assert_eq!(loaded, updated);
    }

    #[tokio::test]
    async fn test_update_invalid_leaves_record() {
        let db = setup().await;
        let created = create_customer(&db, draft("Acme Forgings")).await.unwrap();

        let mut bad = draft("Acme Forgings");
        bad.address = "Short".to_string();
        let err = update_customer(&db, created.id.clone(), bad).await.unwrap_err();
        assert_eq!(
            err.fields.unwrap()["address"],
            "Address must be at least 10 characters"
        );

        assert_eq!(get_customer(&db, created.id.clone()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_customer() {
        let db = setup().await;

        let err = get_customer(&db, "nope".to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = update_customer(&db, "nope".to_string(), draft("Acme Forgings"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = delete_customer(&db, "nope".to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup().await;
        let created = create_customer(&db, draft("Acme Forgings")).await.unwrap();

        delete_customer(&db, created.id.clone()).await.unwrap();
        assert!(list_customers(&db, None).await.unwrap().is_empty());
    }
}
