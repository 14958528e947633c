use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

use business::domain::shared::value_objects::UserId;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth.invalid_token_header: {0}")]
    InvalidTokenHeader(String),
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.certs_fetch_failed: {0}")]
    CertsFetch(String),
    #[error("auth.cert_decode_failed: {0}")]
    CertDecode(String),
    #[error("auth.token_validation_failed: {0}")]
    TokenValidation(String),
    #[error("auth.missing_subject")]
    MissingSubject,
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Verifies Firebase ID tokens against Google's rotating signing certs.
///
/// Certs are cached for an hour; the verified `sub` claim becomes the
/// request's [`UserId`].
pub struct FirebaseTokenVerifier {
    project_id: String,
    http: reqwest::Client,
    certs: RwLock<Option<CachedCerts>>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: String) -> Self {
        Self {
            project_id,
            http: reqwest::Client::new(),
            certs: RwLock::new(None),
        }
    }

    pub async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let header: Header =
            decode_header(token).map_err(|e| AuthError::InvalidTokenHeader(e.to_string()))?;
        let kid = header.kid.ok_or(AuthError::MissingKid)?;

        let keys = self.decoding_keys().await?;
        let decoding_key = keys.get(&kid).ok_or(AuthError::UnknownKid)?;

        let expected_issuer = format!("https://securetoken.google.com/{}", self.project_id);
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&expected_issuer]);
        validation.validate_exp = true;

        let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
            .map_err(|e| AuthError::TokenValidation(e.to_string()))?;

        UserId::parse(token_data.claims.sub).ok_or(AuthError::MissingSubject)
    }

    async fn decoding_keys(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        {
            let cache = self.certs.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.fetched_at.elapsed() < CACHE_TTL
            {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.fetch_google_certs().await?;

        let mut cache = self.certs.write().await;
        *cache = Some(CachedCerts {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }

    async fn fetch_google_certs(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let response: HashMap<String, String> = self
            .http
            .get(GOOGLE_CERTS_URL)
            .send()
            .await
            .map_err(|e| AuthError::CertsFetch(e.to_string()))?
            .json()
            .await
            .map_err(|e| AuthError::CertsFetch(e.to_string()))?;

        response
            .into_iter()
            .map(|(kid, pem)| {
                DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map(|key| (kid, key))
                    .map_err(|e| AuthError::CertDecode(e.to_string()))
            })
            .collect()
    }

    #[cfg(test)]
    async fn with_cached_keys(self, keys: HashMap<String, DecodingKey>) -> Self {
        *self.certs.write().await = Some(CachedCerts {
            keys,
            fetched_at: Instant::now(),
        });
        self
    }
}

/// Firebase Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub UserId);

async fn firebase_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<UserId> {
    let Some(verifier) = req.data::<Arc<FirebaseTokenVerifier>>() else {
        tracing::error!("Firebase verifier is not registered on the route");
        return None;
    };

    match verifier.verify(&bearer.token).await {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}
