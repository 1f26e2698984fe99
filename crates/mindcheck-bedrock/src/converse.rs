use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use crate::error::BedrockError;
use crate::generator::{GenerationRequest, TextGenerator};

/// Text generation through the Bedrock Converse API.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, BedrockError> {
        invoke_converse(&self.client, &self.model_id, request).await
    }
}

/// Send one user message and return the concatenated text of the reply.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    request: GenerationRequest<'_>,
) -> Result<String, BedrockError> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(request.prompt.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let mut converse = client.converse().model_id(model_id).messages(message);

    if let Some(system_prompt) = request.system_prompt {
        converse = converse.system(SystemContentBlock::Text(system_prompt.to_string()));
    }
    if request.max_tokens.is_some() || request.temperature.is_some() {
        converse = converse.inference_config(
            InferenceConfiguration::builder()
                .set_max_tokens(request.max_tokens)
                .set_temperature(request.temperature)
                .build(),
        );
    }

    let response = converse
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if let Some(usage) = response.usage() {
        info!(
            model = model_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "converse complete"
        );
    }

    Ok(response_text)
}
