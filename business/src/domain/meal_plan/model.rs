use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::MealType;

use super::errors::MealPlanError;

/// Nominal plan length: two weeks.
pub const DEFAULT_PLAN_DAYS: usize = 14;
/// Upper bound accepted for a single generation request.
pub const MAX_PLAN_DAYS: usize = 31;

/// One meal name per meal type, without a date.
///
/// This is the shape the generative backend answers with; dates are stamped
/// afterwards by [`assign_dates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMeals {
    #[serde(rename = "Breakfast")]
    pub breakfast: String,
    #[serde(rename = "Lunch")]
    pub lunch: String,
    #[serde(rename = "Dinner")]
    pub dinner: String,
    #[serde(rename = "Snack")]
    pub snack: String,
}

impl DailyMeals {
    pub fn meal(&self, meal_type: MealType) -> &str {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    fn set_meal(&mut self, meal_type: MealType, value: String) {
        match meal_type {
            MealType::Breakfast => self.breakfast = value,
            MealType::Lunch => self.lunch = value,
            MealType::Dinner => self.dinner = value,
            MealType::Snack => self.snack = value,
        }
    }

    fn is_complete(&self) -> bool {
        MealType::ALL
            .iter()
            .all(|meal_type| !self.meal(*meal_type).trim().is_empty())
    }
}

/// Meals assigned to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Serialised as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(flatten)]
    pub meals: DailyMeals,
}

impl DailyPlan {
    pub fn new(date: NaiveDate, meals: DailyMeals) -> Self {
        Self { date, meals }
    }

    pub fn meal(&self, meal_type: MealType) -> &str {
        self.meals.meal(meal_type)
    }

    pub fn with_meal(&self, meal_type: MealType, value: String) -> Self {
        let mut updated = self.clone();
        updated.meals.set_meal(meal_type, value);
        updated
    }
}

/// Days ordered by ascending, gap-free dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: Vec<DailyPlan>,
}

impl MealPlan {
    /// Builds a plan and checks it with [`MealPlan::validate`].
    pub fn from_days(days: Vec<DailyPlan>) -> Result<Self, MealPlanError> {
        let plan = Self { days };
        plan.validate()?;
        Ok(plan)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(days: Vec<DailyPlan>) -> Self {
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn day(&self, index: usize) -> Result<&DailyPlan, MealPlanError> {
        self.days.get(index).ok_or(MealPlanError::IndexError {
            index,
            len: self.days.len(),
        })
    }

    /// Position of `date` inside the plan, if the plan covers it.
    pub fn day_index_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }

    /// Returns a copy of the plan with a single slot replaced.
    pub fn with_meal(
        &self,
        index: usize,
        meal_type: MealType,
        value: String,
    ) -> Result<Self, MealPlanError> {
        let updated_day = self.day(index)?.with_meal(meal_type, value);
        let mut days = self.days.clone();
        days[index] = updated_day;
        Ok(Self { days })
    }

    /// Every meal is non-blank and the dates form one contiguous ascending run.
    pub fn validate(&self) -> Result<(), MealPlanError> {
        let Some(start) = self.start_date() else {
            return Ok(());
        };

        for (offset, day) in self.days.iter().enumerate() {
            if !day.meals.is_complete() {
                return Err(MealPlanError::InvalidPlan);
            }
            let expected = start
                .checked_add_days(Days::new(offset as u64))
                .ok_or(MealPlanError::InvalidPlan)?;
            if day.date != expected {
                return Err(MealPlanError::InvalidPlan);
            }
        }

        Ok(())
    }
}

/// Stamps day `i` with `start + i` days.
pub fn assign_dates(start: NaiveDate, days: Vec<DailyMeals>) -> Result<MealPlan, MealPlanError> {
    let days = days
        .into_iter()
        .enumerate()
        .map(|(offset, meals)| {
            start
                .checked_add_days(Days::new(offset as u64))
                .map(|date| DailyPlan::new(date, meals))
                .ok_or(MealPlanError::InvalidPlan)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MealPlan { days })
}
