use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::catalog::model::{MealCatalog, MealType};

static PLACEHOLDER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").ok());

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt.unbound_variable: {0}")]
    Unbound(String),
    #[error("prompt.invalid_template")]
    InvalidTemplate,
}

/// A value bound to a template placeholder.
#[derive(Debug, Clone)]
enum Binding {
    /// Substituted as is.
    Scalar(String),
    /// Expanded to one `- item` line per entry.
    List(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct PromptVariables {
    bindings: HashMap<String, Binding>,
}

impl PromptVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: &str, value: impl ToString) -> Self {
        self.bindings
            .insert(name.to_string(), Binding::Scalar(value.to_string()));
        self
    }

    pub fn list(mut self, name: &str, items: &[String]) -> Self {
        self.bindings
            .insert(name.to_string(), Binding::List(items.to_vec()));
        self
    }
}

/// Prompt text with `{{name}}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub text: &'static str,
}

impl PromptTemplate {
    pub fn render(&self, variables: &PromptVariables) -> Result<String, PromptError> {
        let pattern = PLACEHOLDER.as_ref().ok_or(PromptError::InvalidTemplate)?;

        let mut rendered = String::with_capacity(self.text.len());
        let mut last = 0;
        for captures in pattern.captures_iter(self.text) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            rendered.push_str(&self.text[last..whole.start()]);
            match variables.bindings.get(name.as_str()) {
                Some(Binding::Scalar(value)) => rendered.push_str(value),
                Some(Binding::List(items)) => {
                    let lines: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
                    rendered.push_str(&lines.join("\n"));
                }
                None => return Err(PromptError::Unbound(name.as_str().to_string())),
            }
            last = whole.end();
        }
        rendered.push_str(&self.text[last..]);

        Ok(rendered)
    }
}

pub const PLAN_PROMPT: PromptTemplate = PromptTemplate {
    name: "meal_plan",
    text: r#"You plan meals for a household. Build a {{day_count}}-day meal plan using ONLY the items listed below.

Rules:
1. For every day pick exactly one Breakfast, one Lunch, one Dinner and one Snack.
2. Each choice MUST be copied exactly from the matching list. Never invent or rename items.
3. Avoid repeating the same item on consecutive days and spread repetitions across the {{day_count}} days.
4. Answer with a JSON object whose "days" array holds exactly {{day_count}} objects with the keys "Breakfast", "Lunch", "Dinner" and "Snack".

Breakfast items:
{{breakfast_items}}

Lunch items:
{{lunch_items}}

Dinner items:
{{dinner_items}}

Snack items:
{{snack_items}}
"#,
};

pub const SINGLE_MEAL_PROMPT: PromptTemplate = PromptTemplate {
    name: "single_meal",
    text: r#"Suggest a replacement {{meal_type}} for a meal plan.

The current {{meal_type}} is: {{current_meal}}

Choose exactly one item from this list. It must not be "{{current_meal}}":
{{alternatives}}

Answer with a JSON object of the form {"meal": "<item copied exactly from the list>"}.
"#,
};

/// Renders the plan prompt with each catalog list enumerated verbatim.
pub fn plan_prompt(catalog: &MealCatalog, day_count: usize) -> Result<String, PromptError> {
    let variables = PromptVariables::new()
        .scalar("day_count", day_count)
        .list("breakfast_items", catalog.items(MealType::Breakfast))
        .list("lunch_items", catalog.items(MealType::Lunch))
        .list("dinner_items", catalog.items(MealType::Dinner))
        .list("snack_items", catalog.items(MealType::Snack));

    PLAN_PROMPT.render(&variables)
}

/// Renders the single-meal prompt; `alternatives` must already exclude
/// `current_meal`.
pub fn single_meal_prompt(
    meal_type: MealType,
    current_meal: &str,
    alternatives: &[String],
) -> Result<String, PromptError> {
    let variables = PromptVariables::new()
        .scalar("meal_type", meal_type)
        .scalar("current_meal", current_meal)
        .list("alternatives", alternatives);

    SINGLE_MEAL_PROMPT.render(&variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_substitute_scalars_and_expand_lists() {
        let template = PromptTemplate {
            name: "test",
            text: "Pick {{ count }} of:\n{{items}}\nDone",
        };
        let variables = PromptVariables::new()
            .scalar("count", 2)
            .list("items", &["Oats".to_string(), "Eggs".to_string()]);

        let rendered = template.render(&variables).unwrap();

        assert_eq!(rendered, "Pick 2 of:\n- Oats\n- Eggs\nDone");
    }

    #[test]
    fn should_reuse_compiled_placeholder_pattern_across_renders() {
        let template = PromptTemplate {
            name: "test",
            text: "{{a}}-{{b}}",
        };
        let variables = PromptVariables::new().scalar("a", 1).scalar("b", 2);

        assert!(PLACEHOLDER.is_some());
        assert_eq!(template.render(&variables).unwrap(), "1-2");
        assert_eq!(template.render(&variables).unwrap(), "1-2");
    }

    #[test]
    fn should_fail_on_unbound_placeholder() {
        let template = PromptTemplate {
            name: "test",
            text: "Hello {{who}}",
        };

        let result = template.render(&PromptVariables::new());

        assert_eq!(result, Err(PromptError::Unbound("who".to_string())));
    }

    #[test]
    fn should_render_empty_list_as_nothing() {
        let template = PromptTemplate {
            name: "test",
            text: "[{{items}}]",
        };
        let variables = PromptVariables::new().list("items", &[]);

        assert_eq!(template.render(&variables).unwrap(), "[]");
    }

    #[test]
    fn should_enumerate_every_catalog_item_in_plan_prompt() {
        let catalog = MealCatalog::default_seed();

        let prompt = plan_prompt(&catalog, 14).unwrap();

        assert!(prompt.contains("14-day meal plan"));
        for meal_type in MealType::ALL {
            for item in catalog.items(meal_type) {
                assert!(prompt.contains(&format!("- {}\n", item)), "missing {}", item);
            }
        }
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn should_name_current_meal_in_single_meal_prompt() {
        let alternatives = vec!["Soup".to_string(), "Curry".to_string()];

        let prompt = single_meal_prompt(MealType::Dinner, "Pasta", &alternatives).unwrap();

        assert!(prompt.contains("The current Dinner is: Pasta"));
        assert!(prompt.contains("- Soup\n- Curry"));
        assert!(!prompt.contains("- Pasta"));
    }
}
