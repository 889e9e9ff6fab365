//! Prompt builders.
//!
//! Pure string functions; the product speaks Brazilian Portuguese, so the
//! prompts do too. Each consumer has a static fallback for when generation
//! fails — AI text is always best-effort.

/// Motivational text attached to a goal at creation time.
pub fn goal_motivation(addiction: &str, dependency_level: Option<&str>) -> String {
    let level_line = match dependency_level {
        Some(level) => format!("O nível de dependência é: {level}.\n"),
        None => String::new(),
    };
    format!(
        "Como especialista em dependências químicas e comportamentais, gere um \
texto motivacional e informativo sobre como superar o vício em {addiction}.\n\
{level_line}\n\
Inclua:\n\
1. 3-4 dicas práticas específicas para largar esse vício\n\
2. Efeitos positivos esperados nos primeiros 7, 30 e 90 dias sem o vício\n\
3. Principais riscos e efeitos negativos desse vício na saúde\n\
4. Uma mensagem motivacional final\n\n\
Mantenha um tom empático, positivo e profissional. Máximo 300 palavras."
    )
}

/// Shorter motivation blurb generated while finishing onboarding, attached
/// to the suggested first goal.
pub fn onboarding_motivation(addiction: &str, dependency_level: &str) -> String {
    format!(
        "Como especialista em dependências químicas e comportamentais, gere um \
texto motivacional e informativo (máximo 150 palavras) sobre como superar o \
vício em {addiction}.\n\
O nível de dependência informado é: {dependency_level}.\n\
O texto deve ser encorajador, prático e focado no primeiro passo e na jornada.\n\
Inclua:\n\
1. Reconhecimento da dificuldade.\n\
2. Uma frase de encorajamento.\n\
3. Um lembrete de que a jornada é um passo de cada vez.\n\
4. Uma breve dica prática inicial.\n\
Seja conciso, empático e motivador."
    )
}

/// Chatbot reply prompt. `context` is the recent-conversation block built by
/// [`crate::context::conversation_context`]; empty when the conversation is
/// new.
pub fn chatbot_reply(user_message: &str, context: &str) -> String {
    let context_line = if context.is_empty() {
        String::new()
    } else {
        format!("Contexto das conversas anteriores:\n{context}\n\n")
    };
    format!(
        "Você é um assistente de apoio emocional especializado em ajudar pessoas \
a superar vícios. Responda de forma empática, motivadora e profissional.\n\n\
{context_line}\
Mensagem do usuário: \"{user_message}\"\n\n\
Diretrizes:\n\
- Seja empático e compreensivo\n\
- Ofereça apoio emocional genuíno\n\
- Sugira estratégias práticas quando apropriado\n\
- Se detectar linguagem de crise ou risco, recomende buscar ajuda profissional\n\
- Mantenha o foco na recuperação e bem-estar\n\
- Máximo 150 palavras\n\n\
Resposta:"
    )
}

/// Reflection on a journal entry.
pub fn journal_reflection(entry_text: &str) -> String {
    format!(
        "Analise esta entrada de diário de uma pessoa em processo de recuperação \
de vícios:\n\n\
\"{entry_text}\"\n\n\
Forneça:\n\
1. Um feedback empático sobre o que a pessoa compartilhou\n\
2. Reconhecimento dos progressos ou desafios mencionados\n\
3. Uma sugestão prática para o próximo passo\n\
4. Palavras de encorajamento\n\n\
Resposta em tom acolhedor e profissional. Máximo 100 palavras."
    )
}

/// Fallback motivation when generation fails at goal creation.
pub const MOTIVATION_FALLBACK: &str =
    "Defina seus primeiros passos para a recuperação e explore dicas personalizadas mais tarde.";

/// Fallback chatbot reply when generation fails.
pub const REPLY_FALLBACK: &str =
    "Desculpe, não consegui gerar uma resposta no momento. Tente novamente mais tarde.";
