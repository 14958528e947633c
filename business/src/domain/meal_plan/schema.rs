use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::catalog::model::MealType;

use super::errors::BackendError;
use super::model::DailyMeals;

/// Declared output shape sent along with a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    pub name: &'static str,
    /// JSON Schema of the expected answer.
    pub definition: Value,
}

type ShapeCheck<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Typed view over a [`SchemaDefinition`].
///
/// Decoding never trusts the backend to have honoured the schema: after
/// serde decoding, `check` runs the constraints serde cannot express
/// (lengths, blank strings).
pub struct OutputSchema<T> {
    definition: SchemaDefinition,
    check: ShapeCheck<T>,
}

impl<T: DeserializeOwned> OutputSchema<T> {
    pub fn new(
        definition: SchemaDefinition,
        check: impl Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            definition,
            check: Box::new(check),
        }
    }

    pub fn definition(&self) -> &SchemaDefinition {
        &self.definition
    }

    pub fn decode(&self, value: Value) -> Result<T, BackendError> {
        let decoded: T = serde_json::from_value(value)
            .map_err(|e| BackendError::SchemaMismatch(e.to_string()))?;
        (self.check)(&decoded).map_err(BackendError::SchemaMismatch)?;
        Ok(decoded)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    pub days: Vec<DailyMeals>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealChoice {
    pub meal: String,
}

fn daily_meals_definition() -> Value {
    json!({
        "type": "object",
        "properties": {
            "Breakfast": { "type": "string" },
            "Lunch": { "type": "string" },
            "Dinner": { "type": "string" },
            "Snack": { "type": "string" }
        },
        "required": ["Breakfast", "Lunch", "Dinner", "Snack"],
        "additionalProperties": false
    })
}

/// `{"days": [...]}` with exactly `day_count` entries of four non-blank strings.
pub fn plan_schema(day_count: usize) -> OutputSchema<PlanResponse> {
    let definition = SchemaDefinition {
        name: "meal_plan",
        definition: json!({
            "type": "object",
            "properties": {
                "days": {
                    "type": "array",
                    "items": daily_meals_definition(),
                    "minItems": day_count,
                    "maxItems": day_count
                }
            },
            "required": ["days"],
            "additionalProperties": false
        }),
    };

    OutputSchema::new(definition, move |response: &PlanResponse| {
        if response.days.len() != day_count {
            return Err(format!(
                "expected {} days, got {}",
                day_count,
                response.days.len()
            ));
        }
        for (index, day) in response.days.iter().enumerate() {
            for meal_type in MealType::ALL {
                if day.meal(meal_type).trim().is_empty() {
                    return Err(format!("day {} has a blank {}", index, meal_type));
                }
            }
        }
        Ok(())
    })
}

/// `{"meal": "..."}` with a non-blank value.
pub fn meal_choice_schema() -> OutputSchema<MealChoice> {
    let definition = SchemaDefinition {
        name: "meal_choice",
        definition: json!({
            "type": "object",
            "properties": {
                "meal": { "type": "string" }
            },
            "required": ["meal"],
            "additionalProperties": false
        }),
    };

    OutputSchema::new(definition, |choice: &MealChoice| {
        if choice.meal.trim().is_empty() {
            return Err("blank meal".to_string());
        }
        Ok(())
    })
}
