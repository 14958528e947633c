use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;
use persistence::meal_plan::repository::MealPlanRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::generative_backend::OpenAIGenerativeBackend;

use business::application::catalog::add_item::AddCatalogItemUseCaseImpl;
use business::application::catalog::get::GetCatalogUseCaseImpl;
use business::application::catalog::remove_item::RemoveCatalogItemUseCaseImpl;
use business::application::catalog::replace::ReplaceCatalogUseCaseImpl;
use business::application::meal_plan::generate::GenerateMealPlanUseCaseImpl;
use business::application::meal_plan::get_latest::GetLatestMealPlanUseCaseImpl;
use business::application::meal_plan::refresh_meal::RefreshMealUseCaseImpl;
use business::application::meal_plan::replacer::SingleMealReplacerImpl;
use business::application::meal_plan::set_meal::SetMealUseCaseImpl;
use business::application::meal_plan::synthesizer::PlanSynthesizerImpl;
use business::domain::shared::random::SeededRandom;

use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::meal_plan::routes::MealPlanApi;
use crate::api::security::FirebaseTokenVerifier;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub meal_plan_api: MealPlanApi,
    pub token_verifier: Arc<FirebaseTokenVerifier>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let planning = &config.planning;

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool.clone()));
        let plan_repository = Arc::new(MealPlanRepositoryPostgres::new(pool));

        let openai_client = OpenAIClient::new(
            config.openai.api_key.clone(),
            config.openai.base_url.clone(),
            config.openai.model.clone(),
            config.openai.request_timeout,
        )?;
        let backend = Arc::new(OpenAIGenerativeBackend::new(openai_client));

        let random = Arc::new(match planning.random_seed {
            Some(seed) => {
                tracing::info!("Fallback meal picker seeded with {}", seed);
                SeededRandom::from_seed(seed)
            }
            None => SeededRandom::from_os_rng(),
        });

        // Generation services
        let synthesizer = Arc::new(PlanSynthesizerImpl {
            backend: backend.clone(),
            logger: logger.clone(),
            timeout: planning.generation_timeout,
        });
        let replacer = Arc::new(SingleMealReplacerImpl {
            backend,
            random,
            logger: logger.clone(),
            timeout: planning.generation_timeout,
        });

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let replace_catalog_use_case = Arc::new(ReplaceCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCatalogItemUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCatalogItemUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Meal plan use cases
        let generate_use_case = Arc::new(GenerateMealPlanUseCaseImpl {
            catalog_repository: catalog_repository.clone(),
            plan_repository: plan_repository.clone(),
            synthesizer,
            logger: logger.clone(),
            max_attempts: planning.generation_attempts,
        });
        let get_latest_use_case = Arc::new(GetLatestMealPlanUseCaseImpl {
            repository: plan_repository.clone(),
            logger: logger.clone(),
        });
        let refresh_meal_use_case = Arc::new(RefreshMealUseCaseImpl {
            catalog_repository: catalog_repository.clone(),
            plan_repository: plan_repository.clone(),
            replacer,
            logger: logger.clone(),
        });
        let set_meal_use_case = Arc::new(SetMealUseCaseImpl {
            catalog_repository,
            plan_repository,
            logger,
        });

        let catalog_api = CatalogApi::new(
            get_catalog_use_case,
            replace_catalog_use_case,
            add_item_use_case,
            remove_item_use_case,
        );

        let meal_plan_api = MealPlanApi::new(
            generate_use_case,
            get_latest_use_case,
            refresh_meal_use_case,
            set_meal_use_case,
            planning.plan_days,
        );

        Ok(Self {
            health_api: HealthApi::new(),
            catalog_api,
            meal_plan_api,
            token_verifier: Arc::new(FirebaseTokenVerifier::new(
                config.firebase.project_id.clone(),
            )),
        })
    }
}
