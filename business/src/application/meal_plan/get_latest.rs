use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::get_latest::{
    GetLatestMealPlanParams, GetLatestMealPlanUseCase,
};

pub struct GetLatestMealPlanUseCaseImpl {
    pub repository: Arc<dyn MealPlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLatestMealPlanUseCase for GetLatestMealPlanUseCaseImpl {
    async fn execute(&self, params: GetLatestMealPlanParams) -> Result<MealPlan, MealPlanError> {
        self.logger
            .info(&format!("Fetching latest meal plan for user {}", params.user_id));

        match self.repository.get_latest(&params.user_id).await? {
            Some(plan) if !plan.is_empty() => Ok(plan),
            _ => Err(MealPlanError::NotFound),
        }
    }
}
