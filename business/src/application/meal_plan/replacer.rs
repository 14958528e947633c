use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::catalog::model::MealType;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::{BackendError, MealPlanError};
use crate::domain::meal_plan::model::MealPlan;
use crate::domain::meal_plan::prompt::single_meal_prompt;
use crate::domain::meal_plan::schema::meal_choice_schema;
use crate::domain::meal_plan::services::{GenerativeBackend, invoke_typed};
use crate::domain::meal_plan::use_cases::replace_meal::{ReplacementRequest, SingleMealReplacer};
use crate::domain::shared::random::RandomSource;

pub struct SingleMealReplacerImpl {
    pub backend: Arc<dyn GenerativeBackend>,
    pub random: Arc<dyn RandomSource>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

impl SingleMealReplacerImpl {
    /// Candidates other than `current`, in catalog order. Every copy of
    /// `current` is removed; other repeats are kept.
    fn alternatives(candidates: Vec<String>, current: &str) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|candidate| candidate != current)
            .collect()
    }

    async fn ask_backend(
        &self,
        meal_type: MealType,
        current: &str,
        alternatives: &[String],
    ) -> Result<String, BackendError> {
        let prompt = single_meal_prompt(meal_type, current, alternatives)?;
        let choice = invoke_typed(
            self.backend.as_ref(),
            &prompt,
            &meal_choice_schema(),
            self.timeout,
        )
        .await?;

        alternatives
            .iter()
            .find(|alternative| alternative.trim() == choice.meal.trim())
            .cloned()
            .ok_or_else(|| {
                BackendError::SchemaMismatch(format!("'{}' is not an alternative", choice.meal))
            })
    }

    fn random_alternative(&self, alternatives: &[String]) -> String {
        let index = self.random.pick(alternatives.len()) % alternatives.len();
        alternatives[index].clone()
    }
}

#[async_trait]
impl SingleMealReplacer for SingleMealReplacerImpl {
    async fn replace(&self, request: ReplacementRequest) -> Result<MealPlan, MealPlanError> {
        let ReplacementRequest {
            plan,
            day_index,
            meal_type,
            candidates,
        } = request;

        let current = plan.day(day_index)?.meal(meal_type).to_string();
        let alternatives = Self::alternatives(candidates, &current);

        let chosen = match alternatives.as_slice() {
            [] => {
                self.logger.debug(&format!(
                    "No alternative {} for day {}, keeping '{}'",
                    meal_type, day_index, current
                ));
                return Ok(plan);
            }
            [only] => only.clone(),
            _ => match self.ask_backend(meal_type, &current, &alternatives).await {
                Ok(choice) => choice,
                Err(err) => {
                    self.logger.warn(&format!(
                        "Falling back to random {} for day {}: {}",
                        meal_type, day_index, err
                    ));
                    self.random_alternative(&alternatives)
                }
            },
        };

        self.logger.info(&format!(
            "Replacing {} on day {}: '{}' -> '{}'",
            meal_type, day_index, current, chosen
        ));

        plan.with_meal(day_index, meal_type, chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::model::{DailyMeals, assign_dates};
    use crate::domain::meal_plan::schema::SchemaDefinition;
    use crate::domain::shared::random::SeededRandom;
    use chrono::NaiveDate;
    use mockall::mock;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    mock! {
        pub Backend {}

        #[async_trait]
        impl GenerativeBackend for Backend {
            async fn invoke(&self, prompt: &str, schema: &SchemaDefinition) -> Result<Value, BackendError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Random {}

        impl RandomSource for Random {
            fn pick(&self, upper: usize) -> usize;
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_plan() -> MealPlan {
        let day = DailyMeals {
            breakfast: "Oats".to_string(),
            lunch: "Salad".to_string(),
            dinner: "Pasta".to_string(),
            snack: "Apple".to_string(),
        };
        assign_dates(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), vec![day; 3]).unwrap()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn replacer(backend: MockBackend, random: Arc<dyn RandomSource>) -> SingleMealReplacerImpl {
        SingleMealReplacerImpl {
            backend: Arc::new(backend),
            random,
            logger: mock_logger(),
            timeout: Duration::from_secs(5),
        }
    }

    fn silent_backend() -> MockBackend {
        let mut backend = MockBackend::new();
        backend.expect_invoke().never();
        backend
    }

    fn unused_random() -> Arc<dyn RandomSource> {
        let mut random = MockRandom::new();
        random.expect_pick().never();
        Arc::new(random)
    }

    fn request(day_index: usize, meal_type: MealType, candidates: &[&str]) -> ReplacementRequest {
        ReplacementRequest {
            plan: sample_plan(),
            day_index,
            meal_type,
            candidates: names(candidates),
        }
    }

    #[tokio::test]
    async fn should_keep_plan_when_no_alternative_exists() {
        let replacer = replacer(silent_backend(), unused_random());

        let result = replacer
            .replace(request(0, MealType::Lunch, &["Salad"]))
            .await
            .unwrap();

        assert_eq!(result, sample_plan());
    }

    #[tokio::test]
    async fn should_keep_plan_when_candidates_are_only_duplicates_of_current() {
        let replacer = replacer(silent_backend(), unused_random());

        let result = replacer
            .replace(request(1, MealType::Dinner, &["Pasta", "Pasta"]))
            .await
            .unwrap();

        assert_eq!(result, sample_plan());
    }

    #[tokio::test]
    async fn should_take_single_alternative_without_backend() {
        let replacer = replacer(silent_backend(), unused_random());

        let result = replacer
            .replace(request(2, MealType::Dinner, &["Pasta", "Soup", "Pasta"]))
            .await
            .unwrap();

        assert_eq!(result.days[2].meal(MealType::Dinner), "Soup");
        assert_eq!(result.days[1].meal(MealType::Dinner), "Pasta");
    }

    #[tokio::test]
    async fn should_ask_backend_when_alternative_is_repeated() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .times(1)
            .withf(|prompt, _| prompt.contains("- Soup\n- Soup"))
            .returning(|_, _| Ok(json!({ "meal": "Soup" })));
        let replacer = replacer(backend, unused_random());

        let result = replacer
            .replace(request(2, MealType::Dinner, &["Pasta", "Soup", "Soup"]))
            .await
            .unwrap();

        assert_eq!(result.days[2].meal(MealType::Dinner), "Soup");
    }

    #[tokio::test]
    async fn should_use_backend_choice_when_valid() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .times(1)
            .withf(|prompt, schema| {
                prompt.contains("- Soup\n- Curry")
                    && !prompt.contains("- Pasta")
                    && schema.name == "meal_choice"
            })
            .returning(|_, _| Ok(json!({ "meal": "Curry" })));
        let replacer = replacer(backend, unused_random());

        let result = replacer
            .replace(request(0, MealType::Dinner, &["Pasta", "Soup", "Curry"]))
            .await
            .unwrap();

        assert_eq!(result.days[0].meal(MealType::Dinner), "Curry");
    }

    #[tokio::test]
    async fn should_fall_back_to_random_when_backend_fails() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .returning(|_, _| Err(BackendError::Request("500".to_string())));
        let mut random = MockRandom::new();
        random.expect_pick().withf(|upper| *upper == 2).return_const(1usize);
        let replacer = replacer(backend, Arc::new(random));

        let result = replacer
            .replace(request(0, MealType::Dinner, &["Pasta", "Soup", "Curry"]))
            .await
            .unwrap();

        assert_eq!(result.days[0].meal(MealType::Dinner), "Curry");
    }

    #[tokio::test]
    async fn should_fall_back_when_backend_returns_empty_value() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .returning(|_, _| Ok(json!({ "meal": "" })));
        let mut random = MockRandom::new();
        random.expect_pick().return_const(0usize);
        let replacer = replacer(backend, Arc::new(random));

        let result = replacer
            .replace(request(0, MealType::Dinner, &["Pasta", "Soup", "Curry"]))
            .await
            .unwrap();

        assert_eq!(result.days[0].meal(MealType::Dinner), "Soup");
    }

    #[tokio::test]
    async fn should_fall_back_when_backend_returns_current_meal() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .returning(|_, _| Ok(json!({ "meal": "Pasta" })));
        let mut random = MockRandom::new();
        random.expect_pick().return_const(0usize);
        let replacer = replacer(backend, Arc::new(random));

        let result = replacer
            .replace(request(0, MealType::Dinner, &["Pasta", "Soup", "Curry"]))
            .await
            .unwrap();

        assert_eq!(result.days[0].meal(MealType::Dinner), "Soup");
    }

    #[tokio::test]
    async fn should_fall_back_when_backend_invents_meal() {
        let mut backend = MockBackend::new();
        backend
            .expect_invoke()
            .returning(|_, _| Ok(json!({ "meal": "Lasagna" })));
        let mut random = MockRandom::new();
        random.expect_pick().return_const(1usize);
        let replacer = replacer(backend, Arc::new(random));

        let result = replacer
            .replace(request(0, MealType::Dinner, &["Pasta", "Soup", "Curry"]))
            .await
            .unwrap();

        assert_eq!(result.days[0].meal(MealType::Dinner), "Curry");
    }

    #[tokio::test]
    async fn should_fail_out_of_range_without_backend() {
        let replacer = replacer(silent_backend(), unused_random());

        let result = replacer
            .replace(request(3, MealType::Snack, &["Apple", "Nuts"]))
            .await;

        assert!(matches!(
            result,
            Err(MealPlanError::IndexError { index: 3, len: 3 })
        ));
    }

    #[tokio::test]
    async fn should_leave_input_plan_untouched() {
        let replacer = replacer(silent_backend(), unused_random());
        let original = sample_plan();
        let request = ReplacementRequest {
            plan: original.clone(),
            day_index: 0,
            meal_type: MealType::Snack,
            candidates: names(&["Apple", "Nuts"]),
        };

        let updated = replacer.replace(request).await.unwrap();

        assert_eq!(original.days[0].meal(MealType::Snack), "Apple");
        assert_eq!(updated.days[0].meal(MealType::Snack), "Nuts");
    }

    proptest! {
        #[test]
        fn never_keeps_current_meal_when_alternative_exists(
            extra in proptest::collection::vec("[A-Z][a-z]{2,8}", 1..6),
            seed in any::<u64>(),
            backend_fails in any::<bool>(),
        ) {
            prop_assume!(extra.iter().any(|item| item != "Pasta"));
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let mut backend = MockBackend::new();
            let answer = if backend_fails {
                Err(BackendError::EmptyResponse)
            } else {
                Ok(json!({ "meal": "Pasta" }))
            };
            backend.expect_invoke().returning(move |_, _| answer.clone());
            let replacer = replacer(backend, Arc::new(SeededRandom::from_seed(seed)));

            let mut candidates = vec!["Pasta".to_string()];
            candidates.extend(extra.clone());
            let updated = runtime
                .block_on(replacer.replace(ReplacementRequest {
                    plan: sample_plan(),
                    day_index: 1,
                    meal_type: MealType::Dinner,
                    candidates,
                }))
                .unwrap();

            let chosen = updated.days[1].meal(MealType::Dinner);
            prop_assert_ne!(chosen, "Pasta");
            prop_assert!(extra.iter().any(|item| item == chosen));
        }
    }
}
