//! Repository tests against a real PostgreSQL instance.
//!
//! They run only when `MEAL_PLANNER_TEST_DATABASE_URL` points at a server the
//! tests may create databases on; otherwise each test returns early. Every
//! test gets its own temporary database with the crate's migrations applied.

use std::time::Duration;

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use uuid::Uuid;

use business::domain::catalog::model::{MealCatalog, MealType};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::meal_plan::model::{DailyMeals, MealPlan, assign_dates};
use business::domain::meal_plan::repository::MealPlanRepository;
use business::domain::shared::value_objects::UserId;
use persistence::catalog::repository::CatalogRepositoryPostgres;
use persistence::db::run_migrations;
use persistence::meal_plan::repository::MealPlanRepositoryPostgres;

const DATABASE_URL_VAR: &str = "MEAL_PLANNER_TEST_DATABASE_URL";

struct TestDb {
    pool: PgPool,
    name: String,
    maintenance_url: String,
}

impl TestDb {
    async fn create() -> Option<Self> {
        let Ok(base_url) = std::env::var(DATABASE_URL_VAR) else {
            eprintln!("{DATABASE_URL_VAR} is not set, skipping");
            return None;
        };
        let prefix = match base_url.rfind('/') {
            Some(pos) => base_url[..pos].to_string(),
            None => panic!("cannot parse {DATABASE_URL_VAR}"),
        };
        let maintenance_url = format!("{prefix}/postgres");
        let name = format!("meal_planner_test_{}", Uuid::new_v4().simple());

        let maintenance = connect(&maintenance_url).await;
        maintenance
            .execute(format!("CREATE DATABASE {name}").as_str())
            .await
            .unwrap_or_else(|e| panic!("failed to create temp database {name}: {e}"));
        maintenance.close().await;

        let pool = connect(&format!("{prefix}/{name}")).await;
        run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
            .await
            .expect("migrations should succeed");

        Some(Self {
            pool,
            name,
            maintenance_url,
        })
    }

    async fn drop(self) {
        self.pool.close().await;
        let maintenance = connect(&self.maintenance_url).await;
        let _ = maintenance
            .execute(format!("DROP DATABASE IF EXISTS {} WITH (FORCE)", self.name).as_str())
            .await;
        maintenance.close().await;
    }
}

async fn connect(url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(url)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to {url}: {e}"))
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn plan(start: NaiveDate, day_count: usize, dinner: &str) -> MealPlan {
    let meals = DailyMeals {
        breakfast: "Oats".to_string(),
        lunch: "Salad".to_string(),
        dinner: dinner.to_string(),
        snack: "Apple".to_string(),
    };
    assign_dates(start, vec![meals; day_count]).unwrap()
}

#[tokio::test]
async fn should_return_none_when_user_has_no_plan() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());

    let latest = repository.get_latest(&UserId::new("user-1")).await.unwrap();

    assert_eq!(latest, None);
    db.drop().await;
}

#[tokio::test]
async fn should_read_back_saved_plan() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");
    let saved = plan(date(1, 1), 7, "Soup");

    repository.save(&user, &saved).await.unwrap();
    let latest = repository.get_latest(&user).await.unwrap();

    assert_eq!(latest, Some(saved));
    db.drop().await;
}

#[tokio::test]
async fn should_replace_days_when_same_start_is_saved_again() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");

    repository.save(&user, &plan(date(1, 1), 14, "Soup")).await.unwrap();
    let shorter = plan(date(1, 1), 5, "Curry");
    repository.save(&user, &shorter).await.unwrap();
    let latest = repository.get_latest(&user).await.unwrap();

    assert_eq!(latest, Some(shorter));
    db.drop().await;
}

#[tokio::test]
async fn should_keep_single_meal_edit_on_latest_plan() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");
    let original = plan(date(1, 1), 3, "Soup");
    repository.save(&user, &original).await.unwrap();

    let edited = original
        .with_meal(1, MealType::Dinner, "Curry".to_string())
        .unwrap();
    repository.save(&user, &edited).await.unwrap();
    let latest = repository.get_latest(&user).await.unwrap().unwrap();

    assert_eq!(latest.days[0].meal(MealType::Dinner), "Soup");
    assert_eq!(latest.days[1].meal(MealType::Dinner), "Curry");
    db.drop().await;
}

#[tokio::test]
async fn should_return_last_saved_plan_when_it_starts_earlier_and_overlaps() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");
    let later_start = plan(date(1, 10), 14, "A");
    let earlier_start = plan(date(1, 5), 14, "B");

    repository.save(&user, &later_start).await.unwrap();
    repository.save(&user, &earlier_start).await.unwrap();
    let latest = repository.get_latest(&user).await.unwrap();

    assert_eq!(latest, Some(earlier_start));
    db.drop().await;
}

#[tokio::test]
async fn should_not_let_newer_overlapping_plan_rewrite_older_one() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");
    let first = plan(date(1, 5), 14, "A");
    let second = plan(date(1, 10), 14, "B");

    repository.save(&user, &first).await.unwrap();
    repository.save(&user, &second).await.unwrap();
    assert_eq!(repository.get_latest(&user).await.unwrap(), Some(second));

    // Saving the first plan again makes it the latest, with its own days intact.
    repository.save(&user, &first).await.unwrap();
    assert_eq!(repository.get_latest(&user).await.unwrap(), Some(first));
    db.drop().await;
}

#[tokio::test]
async fn should_keep_plans_of_different_users_apart() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = MealPlanRepositoryPostgres::new(db.pool.clone());
    let alice = plan(date(1, 1), 3, "Soup");
    let bob = plan(date(1, 1), 3, "Curry");

    repository.save(&UserId::new("alice"), &alice).await.unwrap();
    repository.save(&UserId::new("bob"), &bob).await.unwrap();

    assert_eq!(
        repository.get_latest(&UserId::new("alice")).await.unwrap(),
        Some(alice)
    );
    assert_eq!(
        repository.get_latest(&UserId::new("bob")).await.unwrap(),
        Some(bob)
    );
    db.drop().await;
}

#[tokio::test]
async fn should_upsert_catalog_document() {
    let Some(db) = TestDb::create().await else {
        return;
    };
    let repository = CatalogRepositoryPostgres::new(db.pool.clone());
    let user = UserId::new("user-1");

    assert_eq!(repository.get(&user).await.unwrap(), None);

    let seed = MealCatalog::default_seed();
    repository.save(&user, &seed).await.unwrap();
    assert_eq!(repository.get(&user).await.unwrap(), Some(seed));

    let replaced = MealCatalog::new(
        vec!["Oats".to_string()],
        vec!["Salad".to_string()],
        vec!["Soup".to_string(), "Curry".to_string()],
        vec![],
    );
    repository.save(&user, &replaced).await.unwrap();
    assert_eq!(repository.get(&user).await.unwrap(), Some(replaced));
    db.drop().await;
}
