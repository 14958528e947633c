use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::shared::value_objects::UserId;

pub struct GenerateMealPlanParams {
    pub user_id: UserId,
    pub day_count: usize,
    pub start_date: NaiveDate,
}

#[async_trait]
pub trait GenerateMealPlanUseCase: Send + Sync {
    async fn execute(&self, params: GenerateMealPlanParams) -> Result<MealPlan, MealPlanError>;
}
