use async_trait::async_trait;

use crate::domain::catalog::model::MealType;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::shared::value_objects::UserId;

pub struct SetMealParams {
    pub user_id: UserId,
    pub day_index: usize,
    pub meal_type: MealType,
    pub meal: String,
}

#[async_trait]
pub trait SetMealUseCase: Send + Sync {
    async fn execute(&self, params: SetMealParams) -> Result<MealPlan, MealPlanError>;
}
