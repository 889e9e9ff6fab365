use jiff::Timestamp;
use uuid::Uuid;

use steady_bedrock::context::{conversation_context, CONTEXT_WINDOW};
use steady_core::models::chat::ChatExchange;

fn exchange(n: usize) -> ChatExchange {
    ChatExchange {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        user_message: format!("pergunta {n}"),
        bot_reply: format!("resposta {n}"),
        timestamp: Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn fresh_conversation_has_no_context() {
    assert_eq!(conversation_context(&[]), "");
}

#[test]
fn single_exchange_produces_both_lines() {
    let block = conversation_context(&[exchange(1)]);
    assert_eq!(block, "Usuário: pergunta 1\nAssistente: resposta 1");
}

#[test]
fn only_the_latest_window_is_kept() {
    let exchanges: Vec<_> = (1..=10).map(exchange).collect();
    let block = conversation_context(&exchanges);

    // Oldest kept exchange is 10 - CONTEXT_WINDOW + 1 = 5.
    assert!(!block.contains("pergunta 4"));
    assert!(block.contains("pergunta 5"));
    assert!(block.contains("resposta 10"));
    assert_eq!(block.lines().count(), CONTEXT_WINDOW * 2);
}
