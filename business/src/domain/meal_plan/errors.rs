use crate::domain::catalog::model::MealType;

use super::prompt::PromptError;

#[derive(Debug, thiserror::Error)]
pub enum MealPlanError {
    /// The backend failed or answered with something that is not a valid plan.
    #[error("meal_plan.generation_failed")]
    GenerationFailure,
    #[error("meal_plan.day_index_out_of_range")]
    IndexError { index: usize, len: usize },
    #[error("meal_plan.invalid_day_count")]
    InvalidDayCount(usize),
    #[error("meal_plan.empty_meal_list")]
    EmptyMealList(MealType),
    #[error("meal_plan.meal_not_in_catalog")]
    MealNotInCatalog,
    #[error("meal_plan.invalid_plan")]
    InvalidPlan,
    #[error("meal_plan.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

/// Failures of the generative-text backend, including responses that do not
/// match the declared output schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("backend.request_failed: {0}")]
    Request(String),
    #[error("backend.timeout")]
    Timeout,
    #[error("backend.empty_response")]
    EmptyResponse,
    #[error("backend.decode_failed: {0}")]
    Decode(String),
    #[error("backend.schema_mismatch: {0}")]
    SchemaMismatch(String),
    #[error("backend.prompt: {0}")]
    Prompt(#[from] PromptError),
}
