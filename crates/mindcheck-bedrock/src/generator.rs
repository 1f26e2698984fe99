use async_trait::async_trait;

use crate::error::BedrockError;

/// A single prompt sent to a text-generation model.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationRequest<'a> {
    pub system_prompt: Option<&'a str>,
    pub prompt: &'a str,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            ..Default::default()
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: &'a str) -> Self {
        self.system_prompt = Some(system_prompt);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Something that turns a prompt into free text.
///
/// The production implementation calls Bedrock; tests inject scripted
/// generators.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, BedrockError>;
}
