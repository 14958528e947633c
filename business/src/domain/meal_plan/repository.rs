use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::MealPlan;

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    /// The plan with the most recent start date, if the user has one.
    async fn get_latest(&self, user_id: &UserId) -> Result<Option<MealPlan>, RepositoryError>;
    /// Upserts every day of the plan, keyed by its date.
    async fn save(&self, user_id: &UserId, plan: &MealPlan) -> Result<(), RepositoryError>;
}
