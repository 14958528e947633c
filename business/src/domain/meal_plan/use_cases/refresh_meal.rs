use async_trait::async_trait;

use crate::domain::catalog::model::MealType;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::shared::value_objects::UserId;

pub struct RefreshMealParams {
    pub user_id: UserId,
    pub day_index: usize,
    pub meal_type: MealType,
}

#[async_trait]
pub trait RefreshMealUseCase: Send + Sync {
    async fn execute(&self, params: RefreshMealParams) -> Result<MealPlan, MealPlanError>;
}
