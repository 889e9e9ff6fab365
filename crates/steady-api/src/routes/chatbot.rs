use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use steady_bedrock::{context, generate, prompts};
use steady_core::models::chat::ChatExchange;
use steady_core::models::points::reason;
use steady_core::storage_keys;
use steady_storage::rows;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::points::award_daily;
use crate::state::AppState;

async fn load_history(state: &AppState, user_id: &str) -> Result<Vec<ChatExchange>, ApiError> {
    let prefix = storage_keys::chat_exchanges_prefix(user_id);
    let mut exchanges: Vec<ChatExchange> =
        rows::list_rows(&state.s3, &state.bucket, &prefix).await?;
    exchanges.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(exchanges)
}

#[derive(Deserialize)]
pub struct SendMessage {
    pub message: String,
}

#[derive(Serialize)]
pub struct BotReply {
    #[serde(flatten)]
    pub exchange: ChatExchange,
    pub points_awarded: bool,
}

pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<SendMessage>,
) -> Result<Json<BotReply>, ApiError> {
    let message = input.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }

    // Recent exchanges give the model conversational memory.
    let history = load_history(&state, &user.sub).await?;
    let context = context::conversation_context(&history);

    let prompt = prompts::chatbot_reply(message, &context);
    let bot_reply = match generate::generate_text(
        &state.aws_config,
        &state.model_id,
        &prompt,
        generate::GenerationParams::STANDARD,
    )
    .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("chatbot generation failed: {e}");
            prompts::REPLY_FALLBACK.to_string()
        }
    };

    let now = Timestamp::now();
    let exchange = ChatExchange {
        id: Uuid::new_v4(),
        user_id: user.sub.clone(),
        user_message: message.to_string(),
        bot_reply,
        timestamp: now,
    };

    let key = storage_keys::chat_exchange(&user.sub, exchange.id);
    rows::save_row(&state.s3, &state.bucket, &key, &exchange).await?;

    let points_awarded =
        award_daily(&state, &user.sub, reason::CHATBOT_CHAT, now, None, None).await?;

    Ok(Json(BotReply {
        exchange,
        points_awarded,
    }))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ChatExchange>>, ApiError> {
    Ok(Json(load_history(&state, &user.sub).await?))
}
