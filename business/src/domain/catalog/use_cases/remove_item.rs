use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{MealCatalog, MealType};
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCatalogItemParams {
    pub user_id: UserId,
    pub meal_type: MealType,
    pub name: String,
}

#[async_trait]
pub trait RemoveCatalogItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCatalogItemParams)
    -> Result<MealCatalog, CatalogError>;
}
