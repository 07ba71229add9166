//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Storage Layout
//! A [`Customer`] is flattened into a single `customers` row:
//! ```text
//! Customer.bank_details.bank_name  →  customers.bank_name
//! Customer.part_numbers            →  customers.part_numbers  (JSON array)
//! Customer.credit_terms            →  customers.credit_terms  ('Net 30', ...)
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use forge_core::{BankDetails, CreditTerms, Customer};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        company_name,
        phone,
        email,
        address,
        gst,
        pan,
        tan,
        commercial_email,
        credit_terms,
        credit_days,
        part_numbers,
        bank_account_holder_name,
        bank_name,
        bank_account_number,
        bank_ifsc_code,
        bank_branch,
        created_at,
        updated_at
    FROM customers
"#;

/// One `customers` row as SQLite returns it.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    company_name: String,
    phone: String,
    email: String,
    address: String,
    gst: String,
    pan: String,
    tan: String,
    commercial_email: String,
    credit_terms: Option<CreditTerms>,
    credit_days: Option<i64>,
    part_numbers: String,
    bank_account_holder_name: String,
    bank_name: String,
    bank_account_number: String,
    bank_ifsc_code: String,
    bank_branch: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DbError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let part_numbers: Vec<String> =
            serde_json::from_str(&row.part_numbers).map_err(|e| DbError::Corrupt {
                entity: "Customer".to_string(),
                id: row.id.clone(),
                reason: format!("part_numbers: {e}"),
            })?;

        Ok(Customer {
            id: row.id,
            company_name: row.company_name,
            phone: row.phone,
            email: row.email,
            address: row.address,
            gst: row.gst,
            pan: row.pan,
            tan: row.tan,
            commercial_email: row.commercial_email,
            credit_terms: row.credit_terms,
            credit_days: row.credit_days,
            part_numbers,
            bank_details: BankDetails {
                account_holder_name: row.bank_account_holder_name,
                bank_name: row.bank_name,
                account_number: row.bank_account_number,
                ifsc_code: row.bank_ifsc_code,
                branch: row.bank_branch,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn encode_part_numbers(customer: &Customer) -> DbResult<String> {
    serde_json::to_string(&customer.part_numbers).map_err(|e| DbError::Internal(e.to_string()))
}

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let all = repo.list().await?;
/// let one = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, ordered by company name (case-insensitive).
    ///
    /// The customers screen loads this once and filters on the client side.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY company_name COLLATE NOCASE, id");
        let rows: Vec<CustomerRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(count = rows.len(), "Listed customers");
        rows.into_iter().map(Customer::try_from).collect()
    }

    /// Gets a customer by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Customer::try_from).transpose()
    }

    /// Inserts a new customer.
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, company = %customer.company_name, "Inserting customer");

        let part_numbers = encode_part_numbers(customer)?;
        let bank = &customer.bank_details;

        sqlx::query(
            r#"
            INSERT INTO customers (
                id, company_name, phone, email, address,
                gst, pan, tan, commercial_email,
                credit_terms, credit_days, part_numbers,
                bank_account_holder_name, bank_name, bank_account_number,
                bank_ifsc_code, bank_branch,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8, ?9,
                ?10, ?11, ?12,
                ?13, ?14, ?15,
                ?16, ?17,
                ?18, ?19
            )
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.company_name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.gst)
        .bind(&customer.pan)
        .bind(&customer.tan)
        .bind(&customer.commercial_email)
        .bind(customer.credit_terms)
        .bind(customer.credit_days)
        .bind(part_numbers)
        .bind(&bank.account_holder_name)
        .bind(&bank.bank_name)
        .bind(&bank.account_number)
        .bind(&bank.ifsc_code)
        .bind(&bank.branch)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replaces every editable column of an existing customer.
    ///
    /// `id` and `created_at` are never written.
    ///
    /// ## Returns
    /// * `Ok(())` - Customer updated
    /// * `Err(DbError::NotFound)` - Customer doesn't exist
    pub async fn update(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Updating customer");

        let part_numbers = encode_part_numbers(customer)?;
        let bank = &customer.bank_details;

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                company_name = ?2,
                phone = ?3,
                email = ?4,
                address = ?5,
                gst = ?6,
                pan = ?7,
                tan = ?8,
                commercial_email = ?9,
                credit_terms = ?10,
                credit_days = ?11,
                part_numbers = ?12,
                bank_account_holder_name = ?13,
                bank_name = ?14,
                bank_account_number = ?15,
                bank_ifsc_code = ?16,
                bank_branch = ?17,
                updated_at = ?18
            WHERE id = ?1
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.company_name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.gst)
        .bind(&customer.pan)
        .bind(&customer.tan)
        .bind(&customer.commercial_email)
        .bind(customer.credit_terms)
        .bind(customer.credit_days)
        .bind(part_numbers)
        .bind(&bank.account_holder_name)
        .bind(&bank.bank_name)
        .bind(&bank.account_number)
        .bind(&bank.ifsc_code)
        .bind(&bank.branch)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", &customer.id));
        }

        Ok(())
    }

    /// Deletes a customer permanently.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Counts customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
