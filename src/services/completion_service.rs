use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The text-completion call, sealed behind a trait so the rest of the system
/// treats it as prompt in, text out. The service has no structured error
/// channel: a missing or empty completion is the only failure signal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> AppResult<String>;
}

pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
}

impl OpenAiGateway {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, model: &str, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        let response: serde_json::Value = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|err| AppError::GatewayUnavailable(err.to_string()))?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::GatewayUnavailable("completion returned no content".to_string())
            })?;

        log::debug!(
            "completion round-trip: model={} prompt_chars={} answer_chars={}",
            model,
            prompt.chars().count(),
            content.chars().count()
        );

        Ok(content)
    }
}
