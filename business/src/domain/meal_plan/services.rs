use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::BackendError;
use super::schema::{OutputSchema, SchemaDefinition};

/// Service port for the external generative-text backend.
///
/// Implementations send the rendered prompt together with the declared
/// output schema and return the decoded JSON answer untouched.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn invoke(&self, prompt: &str, schema: &SchemaDefinition)
    -> Result<Value, BackendError>;
}

/// Calls the backend under a hard timeout and decodes the answer against
/// `schema`.
pub async fn invoke_typed<T: DeserializeOwned>(
    backend: &dyn GenerativeBackend,
    prompt: &str,
    schema: &OutputSchema<T>,
    timeout: Duration,
) -> Result<T, BackendError> {
    let value = tokio::time::timeout(timeout, backend.invoke(prompt, schema.definition()))
        .await
        .map_err(|_| BackendError::Timeout)??;

    schema.decode(value)
}
