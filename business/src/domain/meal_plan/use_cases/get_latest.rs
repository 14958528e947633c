use async_trait::async_trait;

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::shared::value_objects::UserId;

pub struct GetLatestMealPlanParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetLatestMealPlanUseCase: Send + Sync {
    async fn execute(&self, params: GetLatestMealPlanParams) -> Result<MealPlan, MealPlanError>;
}
