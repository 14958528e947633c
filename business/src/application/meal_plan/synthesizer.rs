use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::catalog::model::{MealCatalog, MealType};
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::{DailyMeals, MAX_PLAN_DAYS, MealPlan, assign_dates};
use crate::domain::meal_plan::prompt::plan_prompt;
use crate::domain::meal_plan::schema::plan_schema;
use crate::domain::meal_plan::services::{GenerativeBackend, invoke_typed};
use crate::domain::meal_plan::use_cases::synthesize::{GenerationRequest, PlanSynthesizer};

pub struct PlanSynthesizerImpl {
    pub backend: Arc<dyn GenerativeBackend>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

impl PlanSynthesizerImpl {
    fn check_request(request: &GenerationRequest) -> Result<(), MealPlanError> {
        if request.day_count == 0 || request.day_count > MAX_PLAN_DAYS {
            return Err(MealPlanError::InvalidDayCount(request.day_count));
        }
        for meal_type in MealType::ALL {
            if request.catalog.items(meal_type).is_empty() {
                return Err(MealPlanError::EmptyMealList(meal_type));
            }
        }
        Ok(())
    }

    /// Maps every suggested meal onto the catalog entry it names.
    ///
    /// A meal that is not in its catalog list rejects the whole answer.
    fn conform_to_catalog(
        days: Vec<DailyMeals>,
        catalog: &MealCatalog,
    ) -> Result<Vec<DailyMeals>, String> {
        days.into_iter()
            .enumerate()
            .map(|(index, day)| {
                let pick = |meal_type: MealType| {
                    catalog
                        .find(meal_type, day.meal(meal_type))
                        .map(|item| item.to_string())
                        .ok_or_else(|| {
                            format!(
                                "day {}: '{}' is not a listed {} item",
                                index,
                                day.meal(meal_type),
                                meal_type
                            )
                        })
                };
                Ok(DailyMeals {
                    breakfast: pick(MealType::Breakfast)?,
                    lunch: pick(MealType::Lunch)?,
                    dinner: pick(MealType::Dinner)?,
                    snack: pick(MealType::Snack)?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl PlanSynthesizer for PlanSynthesizerImpl {
    async fn synthesize(&self, request: GenerationRequest) -> Result<MealPlan, MealPlanError> {
        Self::check_request(&request)?;

        self.logger.info(&format!(
            "Synthesizing {}-day meal plan starting {}",
            request.day_count, request.start_date
        ));

        let prompt = plan_prompt(&request.catalog, request.day_count).map_err(|err| {
            self.logger
                .error(&format!("Meal plan prompt could not be rendered: {}", err));
            MealPlanError::GenerationFailure
        })?;

        let schema = plan_schema(request.day_count);
        let response = invoke_typed(self.backend.as_ref(), &prompt, &schema, self.timeout)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Meal plan generation failed: {}", err));
                MealPlanError::GenerationFailure
            })?;

        let days = Self::conform_to_catalog(response.days, &request.catalog).map_err(|reason| {
            self.logger
                .error(&format!("Meal plan rejected: {}", reason));
            MealPlanError::GenerationFailure
        })?;

        let plan = assign_dates(request.start_date, days)?;

        self.logger
            .info(&format!("Synthesized meal plan with {} days", plan.len()));

        Ok(plan)
    }
}
