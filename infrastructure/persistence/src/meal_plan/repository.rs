use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::meal_plan::model::MealPlan;
use business::domain::meal_plan::repository::MealPlanRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{MealPlanDayEntity, MealPlanEntity};

pub struct MealPlanRepositoryPostgres {
    pool: PgPool,
}

impl MealPlanRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Meal plan query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl MealPlanRepository for MealPlanRepositoryPostgres {
    async fn get_latest(&self, user_id: &UserId) -> Result<Option<MealPlan>, RepositoryError> {
        let Some(header) = sqlx::query_as::<_, MealPlanEntity>(
            r#"SELECT start_date, day_count FROM meal_plans WHERE user_id = $1
            ORDER BY updated_at DESC, start_date DESC LIMIT 1"#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, MealPlanDayEntity>(
            r#"SELECT plan_date, breakfast, lunch, dinner, snack FROM meal_plan_days
            WHERE user_id = $1 AND plan_start = $2
            ORDER BY plan_date ASC"#,
        )
        .bind(user_id.as_str())
        .bind(header.start_date)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        header.into_domain(rows).map(Some)
    }

    async fn save(&self, user_id: &UserId, plan: &MealPlan) -> Result<(), RepositoryError> {
        let Some(start_date) = plan.start_date() else {
            return Err(RepositoryError::Persistence);
        };
        let day_count = i32::try_from(plan.len()).map_err(|_| RepositoryError::Persistence)?;

        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query(
            r#"INSERT INTO meal_plans (user_id, start_date, day_count, updated_at)
            VALUES ($1, $2, $3, clock_timestamp())
            ON CONFLICT (user_id, start_date) DO UPDATE SET
                day_count = EXCLUDED.day_count,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(user_id.as_str())
        .bind(start_date)
        .bind(day_count)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        sqlx::query("DELETE FROM meal_plan_days WHERE user_id = $1 AND plan_start = $2")
            .bind(user_id.as_str())
            .bind(start_date)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        for day in plan.days.iter().map(MealPlanDayEntity::from_domain) {
            sqlx::query(
                r#"INSERT INTO meal_plan_days
                    (user_id, plan_start, plan_date, breakfast, lunch, dinner, snack)
                VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(user_id.as_str())
            .bind(start_date)
            .bind(day.plan_date)
            .bind(&day.breakfast)
            .bind(&day.lunch)
            .bind(&day.dinner)
            .bind(&day.snack)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;

        Ok(())
    }
}
