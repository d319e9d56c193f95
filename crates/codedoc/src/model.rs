use std::future::Future;

use log::debug;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use crate::error::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// A text-in, text-out generation service.
///
/// The HTTP handlers and CLI commands only see this trait, so tests can swap
/// in a fake and never touch the network.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

/// Credentials and model selection for the Gemini client.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Gemini API key. A missing key is reported by the upstream call, not at startup.
    pub api_key: Option<String>,
    pub model: String,
}

impl ModelConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
        }
    }
}

impl From<&crate::Global> for ModelConfig {
    fn from(global: &crate::Global) -> Self {
        Self::new(global.api_key.clone(), global.model.clone())
    }
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    config: ModelConfig,
}

impl GeminiGenerator {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn create_client(&self) -> Result<gemini::Client, Error> {
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        gemini::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| Error::Upstream(format!("Failed to create Gemini client: {e}")))
    }
}

impl Generator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let client = self.create_client()?;
        let agent = client.agent(&self.config.model).build();

        debug!(
            "Sending {} char prompt to {}",
            prompt.len(),
            self.config.model
        );

        let response = agent
            .prompt(prompt)
            .await
            .map_err(|e| Error::Upstream(format!("Model generation failed: {e:?}")))?;

        debug!("Received {} chars from {}", response.len(), self.config.model);

        Ok(response)
    }
}
