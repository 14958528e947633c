use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::get::load_or_seed;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::set_meal::{SetMealParams, SetMealUseCase};

/// Puts a meal picked by the user into one slot of the latest plan.
pub struct SetMealUseCaseImpl {
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub plan_repository: Arc<dyn MealPlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetMealUseCase for SetMealUseCaseImpl {
    async fn execute(&self, params: SetMealParams) -> Result<MealPlan, MealPlanError> {
        self.logger.info(&format!(
            "Setting {} on day {} to '{}' for user {}",
            params.meal_type, params.day_index, params.meal, params.user_id
        ));

        let plan = self
            .plan_repository
            .get_latest(&params.user_id)
            .await?
            .ok_or(MealPlanError::NotFound)?;

        let catalog = load_or_seed(
            self.catalog_repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
        )
        .await?;

        let meal = catalog
            .find(params.meal_type, &params.meal)
            .ok_or(MealPlanError::MealNotInCatalog)?
            .to_string();

        let updated = plan.with_meal(params.day_index, params.meal_type, meal)?;
        self.plan_repository.save(&params.user_id, &updated).await?;

        Ok(updated)
    }
}
