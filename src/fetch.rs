use serde_json::Value;

use crate::config::Config;
use crate::error::FetchError;
use crate::extract::extract_json;
use crate::llm::{ChatMessage, CompletionClient, CompletionRequest};

/// Sampling is fixed for every stage so that replies stay close to the
/// requested JSON shape.
pub const TEMPERATURE: f32 = 0.2;
pub const MAX_TOKENS: u32 = 4000;

/// Sends one system/user prompt pair and returns the first JSON value found
/// in the reply.
#[derive(Clone)]
pub struct StructuredFetcher {
    client: CompletionClient,
    model: String,
}

impl StructuredFetcher {
    pub fn new(client: CompletionClient, config: &Config) -> Self {
        Self {
            client,
            model: config.llm_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Every failure is logged here with its kind before being returned, so
    /// callers only need to check for a value.
    pub async fn fetch(
        &self,
        stage: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, FetchError> {
        let result = self.try_fetch(stage, system_prompt, user_prompt).await;
        if let Err(err) = &result {
            tracing::error!(
                pipeline.stage = stage,
                error.kind = err.kind(),
                error = %err,
                "Error communicating with LLM"
            );
        }
        result
    }

    async fn try_fetch(
        &self,
        stage: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, FetchError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stage: stage.to_string(),
        };

        let response = self
            .client
            .complete(&request)
            .await
            .map_err(|e| FetchError::Service(format!("{e:#}")))?;

        let json_text = extract_json(response.content.trim())?;
        Ok(serde_json::from_str(json_text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::error::ExtractError;
    use crate::llm::Role;
    use crate::llm::scripted::ScriptedProvider;

    fn fetcher(provider: &ScriptedProvider) -> StructuredFetcher {
        StructuredFetcher::new(
            CompletionClient::new(Arc::new(provider.clone())),
            &Config::default(),
        )
    }

    #[tokio::test]
    async fn test_fetch_parses_wrapped_json() {
        let provider = ScriptedProvider::new()
            .reply("  Sure! Here is the profile:\n```json\n{\"name\": \"Food App\"}\n```\n");
        let value = assert_ok!(fetcher(&provider).fetch("profile", "sys", "usr").await);
        assert_eq!(value, json!({"name": "Food App"}));
    }

    #[tokio::test]
    async fn test_fetch_sends_two_messages_with_fixed_sampling() {
        let provider = ScriptedProvider::new().reply("[]");
        fetcher(&provider)
            .fetch("billing", "system text", "user text")
            .await
            .unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, "system text");
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[1].content, "user text");
        assert_eq!(req.temperature, 0.2);
        assert_eq!(req.max_tokens, 4000);
        assert_eq!(req.stage, "billing");
    }

    #[tokio::test]
    async fn test_fetch_gibberish_is_extraction_failure() {
        let provider = ScriptedProvider::new().reply("lorem ipsum dolor sit amet");
        let err = assert_err!(fetcher(&provider).fetch("profile", "sys", "usr").await);
        assert_eq!(err.kind(), "extraction");
        assert!(matches!(
            err,
            FetchError::Extraction(ExtractError::NoCompleteJson)
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_parse_failure() {
        let provider = ScriptedProvider::new().reply("{name: 'single quotes'}");
        let err = assert_err!(fetcher(&provider).fetch("profile", "sys", "usr").await);
        assert_eq!(err.kind(), "parse");
    }

    #[tokio::test]
    async fn test_fetch_service_error_is_contained() {
        let provider = ScriptedProvider::new().fail("429 rate limit exceeded");
        let err = assert_err!(fetcher(&provider).fetch("report", "sys", "usr").await);
        assert_eq!(err.kind(), "service");
        assert!(err.to_string().contains("429 rate limit exceeded"));
    }
}
