use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::MealCatalog;

/// One catalog document per user, overwritten as a whole on save.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<MealCatalog>, RepositoryError>;
    async fn save(&self, user_id: &UserId, catalog: &MealCatalog) -> Result<(), RepositoryError>;
}
