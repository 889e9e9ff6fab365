use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, InferenceConfiguration, Message};
use tracing::info;

use crate::error::BedrockError;

/// Generation parameters forwarded to the model.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: i32,
}

impl GenerationParams {
    /// Defaults used for motivational content, chatbot replies, and journal
    /// reflections.
    pub const STANDARD: GenerationParams = GenerationParams {
        temperature: 0.7,
        top_p: 0.95,
        max_tokens: 1024,
    };

    /// Tighter budget for the onboarding motivation blurb.
    pub const ONBOARDING: GenerationParams = GenerationParams {
        temperature: 0.7,
        top_p: 1.0,
        max_tokens: 250,
    };
}

/// Send one prompt to Bedrock Converse and return the generated text.
pub async fn generate_text(
    config: &aws_config::SdkConfig,
    model_id: &str,
    prompt: &str,
    params: GenerationParams,
) -> Result<String, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(prompt.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let inference = InferenceConfiguration::builder()
        .temperature(params.temperature)
        .top_p(params.top_p)
        .max_tokens(params.max_tokens)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .messages(message)
        .inference_config(inference)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
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

    info!(model_id, chars = text.len(), "generated text");

    Ok(text)
}
