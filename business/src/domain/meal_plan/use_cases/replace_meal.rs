use async_trait::async_trait;

use crate::domain::catalog::model::MealType;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;

/// Input of a single-slot replacement.
#[derive(Debug, Clone)]
pub struct ReplacementRequest {
    pub plan: MealPlan,
    pub day_index: usize,
    pub meal_type: MealType,
    pub candidates: Vec<String>,
}

#[async_trait]
pub trait SingleMealReplacer: Send + Sync {
    /// Only fails with `IndexError`; backend problems fall back to a random
    /// alternative.
    async fn replace(&self, request: ReplacementRequest) -> Result<MealPlan, MealPlanError>;
}
