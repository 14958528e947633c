use std::sync::Arc;

use chrono::{Local, NaiveDate};
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::model::MealType;
use business::domain::meal_plan::errors::MealPlanError;
use business::domain::meal_plan::model::MealPlan;
use business::domain::meal_plan::use_cases::generate::{
    GenerateMealPlanParams, GenerateMealPlanUseCase,
};
use business::domain::meal_plan::use_cases::get_latest::{
    GetLatestMealPlanParams, GetLatestMealPlanUseCase,
};
use business::domain::meal_plan::use_cases::refresh_meal::{
    RefreshMealParams, RefreshMealUseCase,
};
use business::domain::meal_plan::use_cases::set_meal::{SetMealParams, SetMealUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::meal_plan::dto::{GenerateMealPlanRequest, MealPlanResponse, SetMealRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct MealPlanApi {
    generate_use_case: Arc<dyn GenerateMealPlanUseCase>,
    get_latest_use_case: Arc<dyn GetLatestMealPlanUseCase>,
    refresh_meal_use_case: Arc<dyn RefreshMealUseCase>,
    set_meal_use_case: Arc<dyn SetMealUseCase>,
    default_day_count: usize,
}

impl MealPlanApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateMealPlanUseCase>,
        get_latest_use_case: Arc<dyn GetLatestMealPlanUseCase>,
        refresh_meal_use_case: Arc<dyn RefreshMealUseCase>,
        set_meal_use_case: Arc<dyn SetMealUseCase>,
        default_day_count: usize,
    ) -> Self {
        Self {
            generate_use_case,
            get_latest_use_case,
            refresh_meal_use_case,
            set_meal_use_case,
            default_day_count,
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn plan_json(plan: MealPlan) -> Json<MealPlanResponse> {
    Json(MealPlanResponse::from_plan(plan, today()))
}

/// Meal plan API
///
/// Endpoints for generating a plan and editing its individual slots.
#[OpenApi]
impl MealPlanApi {
    /// Get the latest meal plan
    ///
    /// Returns the most recently generated plan together with the index of
    /// today's date, if the plan covers it.
    #[oai(path = "/meal-plan", method = "get", tag = "ApiTags::MealPlans")]
    async fn get_latest(&self, auth: FirebaseBearer) -> GetMealPlanResponse {
        match self
            .get_latest_use_case
            .execute(GetLatestMealPlanParams { user_id: auth.0 })
            .await
        {
            Ok(plan) => GetMealPlanResponse::Ok(plan_json(plan)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetMealPlanResponse::NotFound(json),
                    _ => GetMealPlanResponse::InternalError(json),
                }
            }
        }
    }

    /// Generate a new meal plan
    ///
    /// Builds a plan from the user's catalog and stores it. The previous
    /// plan stays in place when generation fails.
    #[oai(path = "/meal-plan", method = "post", tag = "ApiTags::MealPlans")]
    async fn generate(
        &self,
        auth: FirebaseBearer,
        body: Json<GenerateMealPlanRequest>,
    ) -> GenerateMealPlanResponse {
        let params = GenerateMealPlanParams {
            user_id: auth.0,
            day_count: body.0.day_count.unwrap_or(self.default_day_count),
            start_date: body.0.start_date.unwrap_or_else(today),
        };

        match self.generate_use_case.execute(params).await {
            Ok(plan) => GenerateMealPlanResponse::Created(plan_json(plan)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateMealPlanResponse::BadRequest(json),
                    422 => GenerateMealPlanResponse::UnprocessableEntity(json),
                    502 => GenerateMealPlanResponse::BadGateway(json),
                    _ => GenerateMealPlanResponse::InternalError(json),
                }
            }
        }
    }

    /// Refresh one meal
    ///
    /// Swaps the meal in one slot for a different meal of the same type.
    /// Falls back to a random pick from the catalog when the generator is
    /// unavailable.
    #[oai(
        path = "/meal-plan/days/:day_index/:meal_type/refresh",
        method = "post",
        tag = "ApiTags::MealPlans"
    )]
    async fn refresh_meal(
        &self,
        auth: FirebaseBearer,
        /// Zero-based position of the day in the plan
        day_index: Path<usize>,
        /// One of breakfast, lunch, dinner, snack
        meal_type: Path<String>,
    ) -> UpdateMealResponse {
        let Ok(meal_type) = meal_type.0.parse::<MealType>() else {
            return UpdateMealResponse::BadRequest(ErrorResponse::invalid_meal_type());
        };

        let params = RefreshMealParams {
            user_id: auth.0,
            day_index: day_index.0,
            meal_type,
        };

        UpdateMealResponse::from_result(self.refresh_meal_use_case.execute(params).await)
    }

    /// Set one meal
    ///
    /// Puts a meal chosen by the user into one slot. The meal must be listed
    /// in the catalog for that meal type.
    #[oai(
        path = "/meal-plan/days/:day_index/:meal_type",
        method = "put",
        tag = "ApiTags::MealPlans"
    )]
    async fn set_meal(
        &self,
        auth: FirebaseBearer,
        /// Zero-based position of the day in the plan
        day_index: Path<usize>,
        /// One of breakfast, lunch, dinner, snack
        meal_type: Path<String>,
        body: Json<SetMealRequest>,
    ) -> UpdateMealResponse {
        let Ok(meal_type) = meal_type.0.parse::<MealType>() else {
            return UpdateMealResponse::BadRequest(ErrorResponse::invalid_meal_type());
        };

        let params = SetMealParams {
            user_id: auth.0,
            day_index: day_index.0,
            meal_type,
            meal: body.0.meal,
        };

        UpdateMealResponse::from_result(self.set_meal_use_case.execute(params).await)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMealPlanResponse {
    #[oai(status = 200)]
    Ok(Json<MealPlanResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateMealPlanResponse {
    #[oai(status = 201)]
    Created(Json<MealPlanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateMealResponse {
    #[oai(status = 200)]
    Ok(Json<MealPlanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateMealResponse {
    fn from_result(result: Result<MealPlan, MealPlanError>) -> Self {
        match result {
            Ok(plan) => Self::Ok(plan_json(plan)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    404 => Self::NotFound(json),
                    422 => Self::UnprocessableEntity(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    }
}
