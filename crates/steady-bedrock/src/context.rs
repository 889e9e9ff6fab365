//! Conversation context builder for chatbot prompts.
//!
//! Assembles the user's most recent exchanges into a transcript block that
//! is prepended to the reply prompt, so the model remembers the thread of
//! the conversation.

use steady_core::models::chat::ChatExchange;

/// How many of the latest exchanges seed the prompt context.
pub const CONTEXT_WINDOW: usize = 6;

/// Build a transcript block from the last [`CONTEXT_WINDOW`] exchanges.
///
/// `exchanges` must be in chronological order. Returns an empty string for a
/// fresh conversation (no context to inject).
pub fn conversation_context(exchanges: &[ChatExchange]) -> String {
    let start = exchanges.len().saturating_sub(CONTEXT_WINDOW);

    let mut lines = Vec::new();
    for exchange in &exchanges[start..] {
        lines.push(format!("Usuário: {}", exchange.user_message));
        lines.push(format!("Assistente: {}", exchange.bot_reply));
    }
    lines.join("\n")
}
