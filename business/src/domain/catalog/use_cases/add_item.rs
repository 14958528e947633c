use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{MealCatalog, MealType};
use crate::domain::shared::value_objects::UserId;

pub struct AddCatalogItemParams {
    pub user_id: UserId,
    pub meal_type: MealType,
    pub name: String,
}

#[async_trait]
pub trait AddCatalogItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCatalogItemParams) -> Result<MealCatalog, CatalogError>;
}
