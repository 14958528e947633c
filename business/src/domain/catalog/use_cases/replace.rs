use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::MealCatalog;
use crate::domain::shared::value_objects::UserId;

pub struct ReplaceCatalogParams {
    pub user_id: UserId,
    pub catalog: MealCatalog,
}

#[async_trait]
pub trait ReplaceCatalogUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceCatalogParams) -> Result<MealCatalog, CatalogError>;
}
