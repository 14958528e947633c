use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::get::load_or_seed;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::generate::{
    GenerateMealPlanParams, GenerateMealPlanUseCase,
};
use crate::domain::meal_plan::use_cases::synthesize::{GenerationRequest, PlanSynthesizer};

pub struct GenerateMealPlanUseCaseImpl {
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub plan_repository: Arc<dyn MealPlanRepository>,
    pub synthesizer: Arc<dyn PlanSynthesizer>,
    pub logger: Arc<dyn Logger>,
    /// Total synthesis attempts; 2 means one retry.
    pub max_attempts: usize,
}

#[async_trait]
impl GenerateMealPlanUseCase for GenerateMealPlanUseCaseImpl {
    async fn execute(&self, params: GenerateMealPlanParams) -> Result<MealPlan, MealPlanError> {
        self.logger.info(&format!(
            "Generating {}-day meal plan for user {}",
            params.day_count, params.user_id
        ));

        let catalog = load_or_seed(
            self.catalog_repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
        )
        .await?;

        let request = GenerationRequest {
            catalog,
            day_count: params.day_count,
            start_date: params.start_date,
        };

        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        let plan = loop {
            match self.synthesizer.synthesize(request.clone()).await {
                Ok(plan) => break plan,
                Err(MealPlanError::GenerationFailure) if attempt < attempts => {
                    self.logger.warn(&format!(
                        "Meal plan attempt {}/{} failed, retrying",
                        attempt, attempts
                    ));
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        };

        self.plan_repository.save(&params.user_id, &plan).await?;

        self.logger.info(&format!(
            "Meal plan saved for user {} starting {}",
            params.user_id, params.start_date
        ));

        Ok(plan)
    }
}
