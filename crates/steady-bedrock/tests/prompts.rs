use steady_bedrock::prompts;

#[test]
fn goal_motivation_names_the_addiction() {
    let prompt = prompts::goal_motivation("cigarro", Some("moderado"));
    assert!(prompt.contains("vício em cigarro"));
    assert!(prompt.contains("O nível de dependência é: moderado."));
    assert!(prompt.contains("Máximo 300 palavras"));
}

#[test]
fn goal_motivation_omits_missing_dependency_level() {
    let prompt = prompts::goal_motivation("álcool", None);
    assert!(prompt.contains("vício em álcool"));
    assert!(!prompt.contains("nível de dependência"));
}

#[test]
fn onboarding_motivation_is_the_short_form() {
    let prompt = prompts::onboarding_motivation("redes sociais", "leve");
    assert!(prompt.contains("máximo 150 palavras"));
    assert!(prompt.contains("redes sociais"));
    assert!(prompt.contains("O nível de dependência informado é: leve."));
}

#[test]
fn chatbot_reply_embeds_message_and_context() {
    let prompt = prompts::chatbot_reply("hoje foi difícil", "Usuário: oi\nAssistente: olá");
    assert!(prompt.contains("Mensagem do usuário: \"hoje foi difícil\""));
    assert!(prompt.contains("Contexto das conversas anteriores:"));
    assert!(prompt.contains("Assistente: olá"));
}

#[test]
fn chatbot_reply_without_context_has_no_context_header() {
    let prompt = prompts::chatbot_reply("oi", "");
    assert!(!prompt.contains("Contexto das conversas anteriores"));
}

#[test]
fn journal_reflection_quotes_the_entry() {
    let prompt = prompts::journal_reflection("consegui passar o dia sem fumar");
    assert!(prompt.contains("\"consegui passar o dia sem fumar\""));
    assert!(prompt.contains("Máximo 100 palavras"));
}
