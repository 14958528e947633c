use super::env;

pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            project_id: env::required("FIREBASE_PROJECT_ID")?,
        })
    }
}
