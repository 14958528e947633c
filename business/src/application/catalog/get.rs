use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::MealCatalog;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get::{GetCatalogParams, GetCatalogUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// Loads the user's catalog, persisting the default seed on first access.
pub(crate) async fn load_or_seed(
    repository: &dyn CatalogRepository,
    logger: &dyn Logger,
    user_id: &UserId,
) -> Result<MealCatalog, RepositoryError> {
    if let Some(catalog) = repository.get(user_id).await? {
        return Ok(catalog);
    }

    logger.info(&format!("Seeding default catalog for user {}", user_id));
    let seed = MealCatalog::default_seed();
    repository.save(user_id, &seed).await?;
    Ok(seed)
}

pub struct GetCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self, params: GetCatalogParams) -> Result<MealCatalog, CatalogError> {
        self.logger
            .info(&format!("Fetching catalog for user {}", params.user_id));

        let catalog =
            load_or_seed(self.repository.as_ref(), self.logger.as_ref(), &params.user_id).await?;
        Ok(catalog)
    }
}
