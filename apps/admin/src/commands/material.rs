//! # Material Commands
//!
//! Commands behind the raw-materials screen and its add/edit form.
//!
//! ## Create vs. Edit
//! ```text
//! create_material  → validate(draft, Create) → material ID format checked
//!                  → insert (duplicate ID → VALIDATION_ERROR on materialId)
//!
//! update_material  → validate(draft, Edit)   → material ID not checked
//!                  → stored material ID kept, draft's value ignored
//! ```

use chrono::Utc;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use forge_core::search::{filter_materials, MaterialFilter};
use forge_core::validation::{self, FormMode};
use forge_core::{Material, MaterialDraft};
use forge_db::generate_id;

/// Lists materials matching the filter.
///
/// The query matches material ID, name, supplier, and description;
/// `low_stock_only` keeps materials at or below their minimum level.
pub async fn list_materials(
    db: &DbState,
    filter: MaterialFilter,
) -> Result<Vec<Material>, ApiError> {
    let start = Instant::now();

    let all = db.inner().materials().list().await?;
    let materials: Vec<Material> = filter_materials(&all, &filter)
        .into_iter()
        .cloned()
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = materials.len(),
        query = %filter.query,
        low_stock_only = filter.low_stock_only,
        "list_materials complete"
    );
    Ok(materials)
}

/// Gets a single material by record id.
pub async fn get_material(db: &DbState, id: String) -> Result<Material, ApiError> {
    debug!(id = %id, "get_material command");
    let material = db
        .inner()
        .materials()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Material", &id))?;
    Ok(material)
}

/// Runs the material rules without saving. `mode` defaults to `Create`.
pub async fn validate_material(
    draft: MaterialDraft,
    mode: Option<FormMode>,
) -> Result<BTreeMap<String, String>, ApiError> {
    let mode = mode.unwrap_or_default();
    Ok(validation::validate_material(&draft, mode).to_messages())
}

/// Validates and stores a new material.
pub async fn create_material(db: &DbState, draft: MaterialDraft) -> Result<Material, ApiError> {
    let errors = validation::validate_material(&draft, FormMode::Create);
    if !errors.is_empty() {
        debug!(fields = errors.len(), "create_material rejected");
        return Err(ApiError::invalid_fields(&errors));
    }

    let material = Material::from_draft(generate_id(), &draft, Utc::now());
    db.inner().materials().insert(&material).await?;

    info!(id = %material.id, material_id = %material.material_id, "Material created");
    Ok(material)
}

/// Validates the draft in edit mode and replaces the stored material.
///
/// The stored material ID is kept whatever the draft carries.
pub async fn update_material(
    db: &DbState,
    id: String,
    draft: MaterialDraft,
) -> Result<Material, ApiError> {
    validation::validate_material(&draft, FormMode::Edit).into_result()?;

    let existing = get_material(db, id).await?;
    if draft.material_id.trim() != existing.material_id {
        debug!(
            stored = %existing.material_id,
            submitted = %draft.material_id,
            "Ignoring material ID change on edit"
        );
    }

    let material = existing.replaced_by(&draft, Utc::now());
    db.inner().materials().update(&material).await?;

    info!(id = %material.id, material_id = %material.material_id, "Material updated");
    Ok(material)
}

/// Deletes a material permanently.
pub async fn delete_material(db: &DbState, id: String) -> Result<(), ApiError> {
    db.inner().materials().delete(&id).await?;
    info!(id = %id, "Material deleted");
    Ok(())
}
