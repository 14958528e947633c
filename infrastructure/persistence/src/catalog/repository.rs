use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::catalog::model::MealCatalog;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{MealCatalogEntity, to_document};

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get(&self, user_id: &UserId) -> Result<Option<MealCatalog>, RepositoryError> {
        let entity = sqlx::query_as::<_, MealCatalogEntity>(
            "SELECT user_id, items, updated_at FROM meal_catalogs WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load catalog: {}", e);
            RepositoryError::DatabaseError
        })?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, user_id: &UserId, catalog: &MealCatalog) -> Result<(), RepositoryError> {
        let document = to_document(catalog)?;

        sqlx::query(
            r#"INSERT INTO meal_catalogs (user_id, items, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(user_id.as_str())
        .bind(Json(document))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save catalog: {}", e);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}
