use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::catalog::model::MealCatalog;
use business::domain::errors::RepositoryError;

#[derive(Debug, FromRow)]
pub struct MealCatalogEntity {
    pub user_id: String,
    pub items: Json<Value>,
    pub updated_at: DateTime<Utc>,
}

impl MealCatalogEntity {
    pub fn into_domain(self) -> Result<MealCatalog, RepositoryError> {
        serde_json::from_value(self.items.0).map_err(|e| {
            tracing::error!("Catalog document for {} is corrupted: {}", self.user_id, e);
            RepositoryError::CorruptedDocument
        })
    }
}

/// Serializes a catalog into the JSONB document layout
/// (`{"Breakfast": [...], "Lunch": [...], ...}`).
pub fn to_document(catalog: &MealCatalog) -> Result<Value, RepositoryError> {
    serde_json::to_value(catalog).map_err(|_| RepositoryError::Persistence)
}
