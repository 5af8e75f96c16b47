use aw_core::{
    generate_chat_response, ArticleCatalog, ChatContext, ChatRequest, Confidence, SummaryMode,
};

fn ask(message: &str, context: Option<ChatContext>) -> aw_core::ChatResponse {
    let catalog = ArticleCatalog::seeded();
    generate_chat_response(
        &catalog,
        &ChatRequest {
            message: message.into(),
            context,
        },
    )
}

#[test]
fn returns_cited_answers_for_safety_questions() {
    let response = ask(
        "Summarize the top 3 stories on AI safety today and compare their stances",
        Some(ChatContext {
            summary_mode: Some(SummaryMode::Beginner),
            ..Default::default()
        }),
    );
    assert!(response.answer.to_lowercase().contains("safety"));
    assert!(!response.citations.is_empty());
    assert!(response.citations.iter().all(|citation| citation.url.starts_with("http")));
}

#[test]
fn adjusts_summary_mode_when_expert_is_requested() {
    let response = ask(
        "Give me an expert comparison of Gemini and Phi-3",
        Some(ChatContext {
            summary_mode: Some(SummaryMode::Beginner),
            ..Default::default()
        }),
    );
    let lower = response.answer.to_lowercase();
    assert!(lower.contains("gemini"));
    assert!(lower.contains("phi"));
    // Expert summaries carry the technical phrasing, not the beginner one.
    assert!(lower.contains("hybrid attention routing"));
    assert!(!lower.contains("remember giant documents"));
}

#[test]
fn empty_message_returns_clarification() {
    let response = ask("   ", None);
    assert_eq!(
        response.answer,
        "I didn't catch a question. Could you rephrase what you're looking for?"
    );
    assert!(response.citations.is_empty());
    assert!(response.actions.is_empty());
    assert_eq!(response.confidence, Confidence::Low);
}

#[test]
fn every_non_empty_message_gets_an_answer() {
    for message in ["hello", "xyzzy plugh", "what changed today", "trending agent tools"] {
        let response = ask(message, None);
        assert!(!response.answer.is_empty(), "no answer for {:?}", message);
        assert!(matches!(
            response.confidence,
            Confidence::Low | Confidence::Medium | Confidence::High
        ));
    }
}

#[test]
fn selected_articles_lead_the_answer() {
    let response = ask(
        "anything new on safety?",
        Some(ChatContext {
            selected_ids: vec!["nvidia-blackwell-industrial".into()],
            ..Default::default()
        }),
    );
    assert_eq!(response.citations[0].article_id, "nvidia-blackwell-industrial");
    assert!(response.citations.len() <= 3);
}

#[test]
fn actions_list_opens_then_saves_then_alert() {
    let response = ask("top safety stories", None);
    let opens: Vec<_> = response.actions.iter().filter(|a| a.starts_with("open:")).collect();
    let saves: Vec<_> = response.actions.iter().filter(|a| a.starts_with("save:")).collect();
    assert_eq!(opens.len(), response.citations.len());
    assert_eq!(saves.len(), response.citations.len());
    assert_eq!(response.actions.last().unwrap(), "alert:safety");
    let first_save = response.actions.iter().position(|a| a.starts_with("save:")).unwrap();
    let last_open = response.actions.iter().rposition(|a| a.starts_with("open:")).unwrap();
    assert!(last_open < first_save);
}

#[test]
fn multiple_backing_articles_mean_high_confidence() {
    let response = ask("latest research papers", None);
    assert!(response.citations.len() >= 2);
    assert_eq!(response.confidence, Confidence::High);
    assert!(response.answer.starts_with("Here are what I found"));
}

#[test]
fn empty_corpus_yields_low_confidence_alert() {
    let catalog = ArticleCatalog::new(vec![]);
    let response = generate_chat_response(
        &catalog,
        &ChatRequest {
            message: "anything on safety?".into(),
            context: None,
        },
    );
    assert_eq!(response.confidence, Confidence::Low);
    assert_eq!(response.actions, vec!["alert:topic".to_string()]);
    assert!(response.answer.contains("couldn't find matching articles"));
}

#[test]
fn answer_ends_with_next_step_suggestions() {
    let response = ask("trending tools", None);
    assert!(response.answer.ends_with(
        "Need more? I can help you read the full article, save to a collection, set an alert for updates.\n"
    ));
}
