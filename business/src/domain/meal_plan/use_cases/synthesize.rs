use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::catalog::model::MealCatalog;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlan;

/// Input of a plan synthesis: the four candidate lists, the number of days
/// and the date of the first day.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub catalog: MealCatalog,
    pub day_count: usize,
    pub start_date: NaiveDate,
}

#[async_trait]
pub trait PlanSynthesizer: Send + Sync {
    /// Fails with `GenerationFailure` when the backend gives no valid plan;
    /// never returns a partial plan.
    async fn synthesize(&self, request: GenerationRequest) -> Result<MealPlan, MealPlanError>;
}
