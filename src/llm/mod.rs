pub mod client;
pub mod openai;
#[cfg(test)]
pub(crate) mod scripted;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

pub use client::CompletionClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stage: String,
}

impl CompletionRequest {
    /// Concatenated content of all messages with the given role.
    pub fn content_of(&self, role: Role) -> String {
        self.messages
            .iter()
            .filter(|m| m.role == role)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub finish_reason: String,
    pub provider: String,
}

#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &CompletionRequest) -> anyhow::Result<CompletionResponse>;
    fn name(&self) -> &str;
}

/// Builds the provider selected by `LLM_PROVIDER`.
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn Provider>, AppError> {
    let provider: Arc<dyn Provider> = match config.llm_provider.as_str() {
        "huggingface" => Arc::new(openai::OpenAIProvider::new_huggingface(
            require(&config.hf_token, "HF_TOKEN")?,
            &config.hf_base_url,
        )),
        "openai" => Arc::new(openai::OpenAIProvider::new(require(
            &config.openai_api_key,
            "OPENAI_API_KEY",
        )?)),
        "ollama" => Arc::new(openai::OpenAIProvider::new_ollama(&config.ollama_base_url)),
        other => {
            return Err(AppError::Config(format!(
                "unknown LLM_PROVIDER {other:?}, expected huggingface, openai or ollama"
            )));
        }
    };
    Ok(provider)
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Config(format!("{name} must be set")))
}
