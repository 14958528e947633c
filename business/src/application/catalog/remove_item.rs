use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::get::load_or_seed;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::MealCatalog;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::remove_item::{
    RemoveCatalogItemParams, RemoveCatalogItemUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveCatalogItemUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCatalogItemUseCase for RemoveCatalogItemUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveCatalogItemParams,
    ) -> Result<MealCatalog, CatalogError> {
        self.logger.info(&format!(
            "Removing {} item '{}' for user {}",
            params.meal_type, params.name, params.user_id
        ));

        let mut catalog =
            load_or_seed(self.repository.as_ref(), self.logger.as_ref(), &params.user_id).await?;
        catalog.remove_item(params.meal_type, &params.name)?;
        self.repository.save(&params.user_id, &catalog).await?;

        Ok(catalog)
    }
}
