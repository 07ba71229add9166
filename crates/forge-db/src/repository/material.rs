//! # Material Repository
//!
//! Database operations for raw materials.
//!
//! ## Material ID Immutability
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert  → writes material_id (UNIQUE)                                 │
//! │  update  → writes everything EXCEPT material_id                        │
//! │                                                                         │
//! │  The edit form shows the material ID read-only; even if a stale       │
//! │  record carries a different value, the stored one is kept.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use forge_core::Material;

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        material_id,
        name,
        description,
        unit,
        current_stock,
        min_stock_level,
        supplier,
        created_at,
        updated_at
    FROM materials
"#;

/// Repository for raw-material database operations.
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    pool: SqlitePool,
}

impl MaterialRepository {
    /// Creates a new MaterialRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MaterialRepository { pool }
    }

    /// Lists every material, ordered by material ID.
    pub async fn list(&self) -> DbResult<Vec<Material>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY material_id");
        let materials: Vec<Material> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(count = materials.len(), "Listed materials");
        Ok(materials)
    }

    /// Gets a material by its record ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Material>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let material: Option<Material> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(material)
    }

    /// Gets a material by its business key (e.g. `RM-STEEL01`).
    pub async fn get_by_material_id(&self, material_id: &str) -> DbResult<Option<Material>> {
        let sql = format!("{SELECT_COLUMNS} WHERE material_id = ?1");
        let material: Option<Material> = sqlx::query_as(&sql)
            .bind(material_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(material)
    }

    /// Inserts a new material.
    ///
    /// ## Returns
    /// * `Ok(())` - Material stored
    /// * `Err(DbError::UniqueViolation)` - Material ID already taken
    pub async fn insert(&self, material: &Material) -> DbResult<()> {
        debug!(id = %material.id, material_id = %material.material_id, "Inserting material");

        sqlx::query(
            r#"
            INSERT INTO materials (
                id, material_id, name, description, unit,
                current_stock, min_stock_level, supplier,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&material.id)
        .bind(&material.material_id)
        .bind(&material.name)
        .bind(&material.description)
        .bind(material.unit)
        .bind(material.current_stock)
        .bind(material.min_stock_level)
        .bind(&material.supplier)
        .bind(material.created_at)
        .bind(material.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { field, .. } if field.ends_with("material_id") => {
                DbError::duplicate("materialId", &material.material_id)
            }
            other => other,
        })?;

        Ok(())
    }

    /// Replaces every editable column of an existing material.
    ///
    /// `id`, `material_id`, and `created_at` are never written.
    pub async fn update(&self, material: &Material) -> DbResult<()> {
        debug!(id = %material.id, "Updating material");

        let result = sqlx::query(
            r#"
            UPDATE materials SET
                name = ?2,
                description = ?3,
                unit = ?4,
                current_stock = ?5,
                min_stock_level = ?6,
                supplier = ?7,
                updated_at = ?8
            WHERE id = ?1
            "#,
        )
        .bind(&material.id)
        .bind(&material.name)
        .bind(&material.description)
        .bind(material.unit)
        .bind(material.current_stock)
        .bind(material.min_stock_level)
        .bind(&material.supplier)
        .bind(material.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Material", &material.id));
        }

        Ok(())
    }

    /// Deletes a material permanently.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting material");

        let result = sqlx::query("DELETE FROM materials WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Material", id));
        }

        Ok(())
    }

    /// Counts materials (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM materials")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
