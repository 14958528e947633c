use super::{
    cors_config, database_config::DatabaseSettings, firebase_config::FirebaseConfig,
    openai_config::OpenAIConfig, planning_config::PlanningConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub openai: OpenAIConfig,
    pub firebase: FirebaseConfig,
    pub planning: PlanningConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let planning = PlanningConfig::from_env()?;
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            openai: OpenAIConfig::from_env(planning.generation_timeout)?,
            firebase: FirebaseConfig::from_env()?,
            planning,
        })
    }
}
