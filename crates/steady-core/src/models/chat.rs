use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted chatbot exchange: the user's message and the assistant's
/// reply. Persisted after every call/response pair so the conversation is
/// durable and recent exchanges can seed the next prompt's context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: Uuid,
    pub user_id: String,
    pub user_message: String,
    pub bot_reply: String,
    pub timestamp: jiff::Timestamp,
}
