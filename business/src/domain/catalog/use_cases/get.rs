use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::MealCatalog;
use crate::domain::shared::value_objects::UserId;

pub struct GetCatalogParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self, params: GetCatalogParams) -> Result<MealCatalog, CatalogError>;
}
