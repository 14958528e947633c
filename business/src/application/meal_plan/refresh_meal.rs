use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::get::load_or_seed;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::refresh_meal::{RefreshMealParams, RefreshMealUseCase};
use crate::domain::meal_plan::use_cases::replace_meal::{ReplacementRequest, SingleMealReplacer};

pub struct RefreshMealUseCaseImpl {
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub plan_repository: Arc<dyn MealPlanRepository>,
    pub replacer: Arc<dyn SingleMealReplacer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshMealUseCase for RefreshMealUseCaseImpl {
    async fn execute(&self, params: RefreshMealParams) -> Result<MealPlan, MealPlanError> {
        self.logger.info(&format!(
            "Refreshing {} on day {} for user {}",
            params.meal_type, params.day_index, params.user_id
        ));

        let plan = self
            .plan_repository
            .get_latest(&params.user_id)
            .await?
            .ok_or(MealPlanError::NotFound)?;

        // Fail before touching the catalog so a bad index never seeds anything.
        plan.day(params.day_index)?;

        let catalog = load_or_seed(
            self.catalog_repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
        )
        .await?;

        let updated = self
            .replacer
            .replace(ReplacementRequest {
                plan,
                day_index: params.day_index,
                meal_type: params.meal_type,
                candidates: catalog.items(params.meal_type).to_vec(),
            })
            .await?;

        self.plan_repository.save(&params.user_id, &updated).await?;

        Ok(updated)
    }
}
