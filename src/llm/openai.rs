use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
};

use super::{ChatMessage, CompletionRequest, CompletionResponse, Provider, Role};

/// Any endpoint speaking the OpenAI chat-completions protocol.
pub struct OpenAIProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    /// Also send the older `max_tokens` field; some compatible servers ignore
    /// `max_completion_tokens`.
    legacy_max_tokens: bool,
}

impl OpenAIProvider {
    pub fn new(api_key: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            provider_name: "openai".to_string(),
            legacy_max_tokens: false,
        }
    }

    pub fn new_huggingface(token: &str, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(token)
            .with_api_base(base_url.trim_end_matches('/'));
        Self {
            client: Client::with_config(config),
            provider_name: "huggingface".to_string(),
            legacy_max_tokens: true,
        }
    }

    pub fn new_ollama(base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key("ollama")
            .with_api_base(format!("{}/v1", base_url.trim_end_matches('/')));
        Self {
            client: Client::with_config(config),
            provider_name: "ollama".to_string(),
            legacy_max_tokens: true,
        }
    }

    #[allow(deprecated)]
    fn build_request(&self, req: &CompletionRequest) -> CreateChatCompletionRequest {
        CreateChatCompletionRequest {
            model: req.model.clone(),
            messages: req.messages.iter().map(to_request_message).collect(),
            temperature: Some(req.temperature),
            max_completion_tokens: Some(req.max_tokens),
            max_tokens: self.legacy_max_tokens.then_some(req.max_tokens),
            ..Default::default()
        }
    }
}

fn to_request_message(message: &ChatMessage) -> ChatCompletionRequestMessage {
    match message.role {
        Role::System => ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: ChatCompletionRequestSystemMessageContent::Text(message.content.clone()),
            name: None,
        }),
        Role::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(message.content.clone()),
            name: None,
        }),
    }
}

#[async_trait::async_trait]
impl Provider for OpenAIProvider {
    async fn complete(&self, req: &CompletionRequest) -> anyhow::Result<CompletionResponse> {
        let request = self.build_request(req);
        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let finish_reason = response
            .choices
            .first()
            .and_then(|c| c.finish_reason)
            .map(|r| format!("{r:?}").to_lowercase())
            .unwrap_or_default();

        let (input_tokens, output_tokens) = match &response.usage {
            Some(usage) => (usage.prompt_tokens, usage.completion_tokens),
            None => (0, 0),
        };

        Ok(CompletionResponse {
            content,
            model: response.model,
            input_tokens,
            output_tokens,
            finish_reason,
            provider: String::new(),
        })
    }

    fn name(&self) -> &str {
        &self.provider_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_role_and_order() {
        let converted: Vec<_> = [ChatMessage::system("sys"), ChatMessage::user("usr")]
            .iter()
            .map(to_request_message)
            .collect();
        assert!(matches!(
            converted[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("usr")],
            temperature: 0.2,
            max_tokens: 4000,
            stage: "profile".to_string(),
        }
    }

    #[test]
    #[allow(deprecated)]
    fn test_compatible_servers_also_get_max_tokens() {
        let hf = OpenAIProvider::new_huggingface("hf_test", "https://router.huggingface.co/v1");
        let built = hf.build_request(&request());
        assert_eq!(built.max_tokens, Some(4000));
        assert_eq!(built.max_completion_tokens, Some(4000));
        assert_eq!(built.temperature, Some(0.2));

        let ollama = OpenAIProvider::new_ollama("http://localhost:11434");
        assert_eq!(ollama.build_request(&request()).max_tokens, Some(4000));

        let openai = OpenAIProvider::new("sk-test").build_request(&request());
        assert_eq!(openai.max_tokens, None);
        assert_eq!(openai.max_completion_tokens, Some(4000));
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(OpenAIProvider::new("sk-test").name(), "openai");
        assert_eq!(
            OpenAIProvider::new_huggingface("hf_test", "https://router.huggingface.co/v1/")
                .name(),
            "huggingface"
        );
        assert_eq!(
            OpenAIProvider::new_ollama("http://localhost:11434").name(),
            "ollama"
        );
    }
}
