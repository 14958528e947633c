use std::time::Duration;

use anyhow::anyhow;
use business::domain::meal_plan::model::{DEFAULT_PLAN_DAYS, MAX_PLAN_DAYS};

use super::env;

/// Tuning of plan generation and meal replacement.
///
/// Environment variables:
/// - PLAN_DAYS: default plan length when a request omits it (default: 14)
/// - PLAN_GENERATION_ATTEMPTS: synthesis attempts per request (default: 2)
/// - GENERATION_TIMEOUT_SECS: hard limit for one backend call (default: 30)
/// - MEAL_RANDOM_SEED: fixes the fallback picker's sequence (optional)
#[derive(Debug, Clone)]
pub struct PlanningConfig {
    pub plan_days: usize,
    pub generation_attempts: usize,
    pub generation_timeout: Duration,
    pub random_seed: Option<u64>,
}

impl PlanningConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            plan_days: env::parsed_or("PLAN_DAYS", DEFAULT_PLAN_DAYS)?,
            generation_attempts: env::parsed_or("PLAN_GENERATION_ATTEMPTS", 2)?,
            generation_timeout: Duration::from_secs(env::parsed_or("GENERATION_TIMEOUT_SECS", 30)?),
            random_seed: env::parsed_optional("MEAL_RANDOM_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_PLAN_DAYS).contains(&self.plan_days) {
            return Err(anyhow!(
                "PLAN_DAYS must be between 1 and {MAX_PLAN_DAYS}, got {}",
                self.plan_days
            ));
        }
        if self.generation_attempts == 0 {
            return Err(anyhow!("PLAN_GENERATION_ATTEMPTS must be at least 1"));
        }
        if self.generation_timeout.is_zero() {
            return Err(anyhow!("GENERATION_TIMEOUT_SECS must be at least 1"));
        }
        Ok(())
    }
}
