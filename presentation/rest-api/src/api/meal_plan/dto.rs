use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::meal_plan::model::{DailyPlan, MealPlan};

#[derive(Debug, Clone, Object)]
pub struct DailyPlanDto {
    /// Calendar date of this day
    pub date: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl From<DailyPlan> for DailyPlanDto {
    fn from(day: DailyPlan) -> Self {
        Self {
            date: day.date,
            breakfast: day.meals.breakfast,
            lunch: day.meals.lunch,
            dinner: day.meals.dinner,
            snack: day.meals.snack,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MealPlanResponse {
    /// Consecutive days, earliest first
    pub days: Vec<DailyPlanDto>,
    /// Position of today's date in `days`, when the plan covers it
    #[oai(skip_serializing_if_is_none)]
    pub today_index: Option<usize>,
}

impl MealPlanResponse {
    pub fn from_plan(plan: MealPlan, today: NaiveDate) -> Self {
        let today_index = plan.day_index_of(today);
        Self {
            days: plan.days.into_iter().map(DailyPlanDto::from).collect(),
            today_index,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GenerateMealPlanRequest {
    /// Number of days to plan (default: configured plan length)
    #[oai(skip_serializing_if_is_none)]
    pub day_count: Option<usize>,
    /// First planned date (default: today)
    #[oai(skip_serializing_if_is_none)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
pub struct SetMealRequest {
    /// Meal name; must be listed in the catalog for this meal type
    pub meal: String,
}
