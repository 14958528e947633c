use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::meal_plan::errors::MealPlanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MealPlanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MealPlanError::GenerationFailure => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "meal_plan.generation_failed",
            ),
            MealPlanError::IndexError { .. } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "meal_plan.day_index_out_of_range",
            ),
            MealPlanError::InvalidDayCount(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "meal_plan.invalid_day_count",
            ),
            MealPlanError::EmptyMealList(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "meal_plan.empty_meal_list",
            ),
            MealPlanError::MealNotInCatalog => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "meal_plan.meal_not_in_catalog",
            ),
            MealPlanError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "meal_plan.not_found"),
            MealPlanError::InvalidPlan => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "meal_plan.invalid_plan",
            ),
            MealPlanError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
