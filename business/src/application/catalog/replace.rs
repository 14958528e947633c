use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::MealCatalog;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::replace::{ReplaceCatalogParams, ReplaceCatalogUseCase};
use crate::domain::logger::Logger;

pub struct ReplaceCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceCatalogUseCase for ReplaceCatalogUseCaseImpl {
    async fn execute(&self, params: ReplaceCatalogParams) -> Result<MealCatalog, CatalogError> {
        self.logger
            .info(&format!("Replacing catalog for user {}", params.user_id));

        let catalog = params.catalog.normalized();
        self.repository.save(&params.user_id, &catalog).await?;

        Ok(catalog)
    }
}
