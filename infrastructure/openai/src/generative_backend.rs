use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::meal_plan::errors::BackendError;
use business::domain::meal_plan::schema::SchemaDefinition;
use business::domain::meal_plan::services::GenerativeBackend;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = "You are a meal planning assistant. Answer with JSON only, \
matching the provided schema exactly, and never name a meal that is not in the lists you were given.";

static FENCED_JSON: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$").ok());

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// `GenerativeBackend` over the Chat Completions endpoint using structured
/// outputs (`response_format: json_schema`, strict).
pub struct OpenAIGenerativeBackend {
    client: OpenAIClient,
}

impl OpenAIGenerativeBackend {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, prompt: &str, schema: &SchemaDefinition) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.7,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "strict": true,
                    "schema": schema.definition,
                }
            }
        })
    }

    /// Removes a surrounding markdown code fence, if any.
    fn strip_fences(content: &str) -> &str {
        let trimmed = content.trim();
        FENCED_JSON
            .as_ref()
            .and_then(|re| re.captures(trimmed))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(trimmed)
    }

    fn parse_content(content: &str) -> Result<Value, BackendError> {
        let json_text = Self::strip_fences(content);
        if json_text.is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        serde_json::from_str(json_text).map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn extract_content(completion: ChatCompletion) -> Result<String, BackendError> {
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(BackendError::EmptyResponse)
    }
}

#[async_trait]
impl GenerativeBackend for OpenAIGenerativeBackend {
    async fn invoke(
        &self,
        prompt: &str,
        schema: &SchemaDefinition,
    ) -> Result<Value, BackendError> {
        let body = self.build_body(prompt, schema);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                BackendError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI returned {}: {}", status, error_text);
            return Err(BackendError::Request(format!("status {}", status)));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        let content = Self::extract_content(completion)?;
        Self::parse_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn backend() -> OpenAIGenerativeBackend {
        let client = OpenAIClient::new(
            "sk-test".to_string(),
            "http://localhost:8089/v1".to_string(),
            "gpt-4o-mini".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        OpenAIGenerativeBackend::new(client)
    }

    #[test]
    fn should_parse_plain_json_content() {
        let value = OpenAIGenerativeBackend::parse_content(r#"{"meal": "Soup"}"#).unwrap();

        assert_eq!(value, json!({"meal": "Soup"}));
    }

    #[test]
    fn should_strip_json_code_fence() {
        let content = "```json\n{\"meal\": \"Soup\"}\n```";

        let value = OpenAIGenerativeBackend::parse_content(content).unwrap();

        assert_eq!(value, json!({"meal": "Soup"}));
    }

    #[test]
    fn should_strip_bare_code_fence() {
        let content = "  ```\n{\"days\": []}\n```  ";

        let value = OpenAIGenerativeBackend::parse_content(content).unwrap();

        assert_eq!(value, json!({"days": []}));
    }

    #[test]
    fn should_report_decode_error_for_prose() {
        let result = OpenAIGenerativeBackend::parse_content("Here is your plan: tacos");

        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn should_report_empty_response_for_blank_content() {
        let result = OpenAIGenerativeBackend::parse_content("```json\n```");

        assert!(matches!(result, Err(BackendError::EmptyResponse)));
    }

    #[test]
    fn should_report_empty_response_without_choices() {
        let completion: ChatCompletion = serde_json::from_value(json!({"choices": []})).unwrap();

        let result = OpenAIGenerativeBackend::extract_content(completion);

        assert!(matches!(result, Err(BackendError::EmptyResponse)));
    }

    #[test]
    fn should_report_empty_response_for_null_content() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "no"}}]
        }))
        .unwrap();

        let result = OpenAIGenerativeBackend::extract_content(completion);

        assert!(matches!(result, Err(BackendError::EmptyResponse)));
    }

    #[test]
    fn should_send_schema_as_strict_response_format() {
        let schema = SchemaDefinition {
            name: "meal_choice",
            definition: json!({"type": "object"}),
        };

        let body = backend().build_body("pick one", &schema);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][1]["content"], "pick one");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "meal_choice");
        assert_eq!(body["response_format"]["json_schema"]["strict"], true);
        assert_eq!(
            body["response_format"]["json_schema"]["schema"],
            json!({"type": "object"})
        );
    }

    #[tokio::test]
    async fn should_map_connection_failure_to_request_error() {
        let client = OpenAIClient::new(
            "sk-test".to_string(),
            "http://127.0.0.1:9".to_string(),
            "gpt-4o-mini".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        let backend = OpenAIGenerativeBackend::new(client);
        let schema = SchemaDefinition {
            name: "meal_choice",
            definition: json!({"type": "object"}),
        };

        let result = backend.invoke("pick one", &schema).await;

        assert!(matches!(result, Err(BackendError::Request(_))));
    }
}
