use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{CompletionRequest, CompletionResponse, Provider};

/// Test double that replays queued replies and records every request.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, content: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(content.into()));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, req: &CompletionRequest) -> anyhow::Result<CompletionResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".to_string()));

        match next {
            Ok(content) => Ok(CompletionResponse {
                content,
                model: req.model.clone(),
                input_tokens: 100,
                output_tokens: 50,
                finish_reason: "stop".to_string(),
                provider: String::new(),
            }),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
