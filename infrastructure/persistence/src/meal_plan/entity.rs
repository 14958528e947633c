use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::meal_plan::model::{DailyMeals, DailyPlan, MealPlan};

/// Header row of a stored plan: which dates it covers.
#[derive(Debug, FromRow)]
pub struct MealPlanEntity {
    pub start_date: NaiveDate,
    pub day_count: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct MealPlanDayEntity {
    pub plan_date: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl MealPlanDayEntity {
    pub fn from_domain(day: &DailyPlan) -> Self {
        Self {
            plan_date: day.date,
            breakfast: day.meals.breakfast.clone(),
            lunch: day.meals.lunch.clone(),
            dinner: day.meals.dinner.clone(),
            snack: day.meals.snack.clone(),
        }
    }

    fn into_domain(self) -> DailyPlan {
        DailyPlan::new(
            self.plan_date,
            DailyMeals {
                breakfast: self.breakfast,
                lunch: self.lunch,
                dinner: self.dinner,
                snack: self.snack,
            },
        )
    }
}

impl MealPlanEntity {
    /// Assembles the plan from its day rows; every date of the header's
    /// range must be present exactly once.
    pub fn into_domain(self, rows: Vec<MealPlanDayEntity>) -> Result<MealPlan, RepositoryError> {
        let expected = usize::try_from(self.day_count).map_err(|_| {
            tracing::error!("Stored plan has a negative day count: {}", self.day_count);
            RepositoryError::CorruptedDocument
        })?;

        if rows.len() != expected || rows.first().map(|row| row.plan_date) != Some(self.start_date)
        {
            tracing::error!(
                "Stored plan starting {} expects {} days, found {}",
                self.start_date,
                expected,
                rows.len()
            );
            return Err(RepositoryError::CorruptedDocument);
        }

        let plan = MealPlan::from_repository(rows.into_iter().map(|row| row.into_domain()).collect());
        plan.validate().map_err(|_| RepositoryError::CorruptedDocument)?;
        Ok(plan)
    }
}
