//! Rule-based chat responder. Reads the free-text message, infers sort,
//! topic, and verbosity intents from fixed keyword tables, queries the feed
//! engine with progressively relaxed filters, and renders a templated
//! answer with citations and follow-up actions.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::ArticleProvider;
use crate::feed::{get_feed, to_feed_item};
use crate::types::{
    ChatCitation, ChatRequest, ChatResponse, Confidence, FeedFilters, FeedItem, SortKey,
    SummaryMode,
};

/// Topic detection table. Scan order is part of the contract: the first
/// topic with any keyword present wins, and at most one tag is active per
/// request.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("Safety", &["safety", "alignment", "risk", "incident"]),
    ("Research", &["research", "paper", "arxiv", "study", "benchmark"]),
    ("Policy", &["policy", "regulation", "law", "act", "senate", "compliance"]),
    ("Tools", &["tool", "product", "platform", "sdk", "copilot"]),
    ("Agents", &["agent", "autonomous", "workflow"]),
];

const NEXT_STEPS: &[&str] = &[
    "read the full article",
    "save to a collection",
    "set an alert for updates",
];

fn detect_sort(lower: &str) -> Option<SortKey> {
    if lower.contains("trend") {
        return Some(SortKey::Trending);
    }
    if lower.contains("policy") {
        return Some(SortKey::Policy);
    }
    if lower.contains("research") {
        return Some(SortKey::Research);
    }
    None
}

fn detect_tag(lower: &str) -> Option<&'static str> {
    for (label, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return Some(label);
        }
    }
    None
}

fn detect_summary_mode(lower: &str, fallback: SummaryMode) -> SummaryMode {
    if lower.contains("expert") {
        return SummaryMode::Expert;
    }
    if lower.contains("like i'm 12") || lower.contains("beginner") {
        return SummaryMode::Beginner;
    }
    fallback
}

fn format_published_time(published_at: DateTime<Utc>) -> String {
    format!("{} UTC", published_at.format("%b %-d, %Y %H:%M"))
}

fn clarification_response() -> ChatResponse {
    ChatResponse {
        answer: "I didn't catch a question. Could you rephrase what you're looking for?".into(),
        citations: vec![],
        actions: vec![],
        confidence: Confidence::Low,
    }
}

fn no_results_response() -> ChatResponse {
    ChatResponse {
        answer: "I couldn't find matching articles yet. Try broadening the topic or adjusting the timeframe—I'm happy to search again!".into(),
        citations: vec![],
        actions: vec!["alert:topic".into()],
        confidence: Confidence::Low,
    }
}

/// Answers a free-text question against the article corpus. Total function:
/// every failure mode degrades to a low-confidence answer instead of an
/// error.
pub fn generate_chat_response(provider: &dyn ArticleProvider, request: &ChatRequest) -> ChatResponse {
    let message = request.message.trim();
    if message.is_empty() {
        return clarification_response();
    }

    let lower = message.to_lowercase();
    let fallback_mode = request
        .context
        .as_ref()
        .and_then(|context| context.summary_mode)
        .unwrap_or_default();
    let mode = detect_summary_mode(&lower, fallback_mode);
    let sort_from_message = detect_sort(&lower);
    let tag_from_message = detect_tag(&lower);
    let since = lower.contains("today").then(|| "24h".to_string());
    debug!(
        ?sort_from_message,
        ?tag_from_message,
        since = since.as_deref(),
        "detected chat intents"
    );

    // Progressive relaxation: full query, then drop the free-text search,
    // then drop the tag as well.
    let mut feed = get_feed(
        provider,
        &FeedFilters {
            search: Some(message.to_string()),
            sort: Some(sort_from_message.unwrap_or(SortKey::Latest)),
            tag: tag_from_message.map(str::to_string),
            since: since.clone(),
            ..Default::default()
        },
    );
    if feed.items.is_empty() && tag_from_message.is_some() {
        feed = get_feed(
            provider,
            &FeedFilters {
                sort: Some(sort_from_message.unwrap_or(SortKey::Latest)),
                tag: tag_from_message.map(str::to_string),
                since: since.clone(),
                ..Default::default()
            },
        );
    }
    if feed.items.is_empty() {
        feed = get_feed(
            provider,
            &FeedFilters {
                sort: Some(sort_from_message.unwrap_or(SortKey::Latest)),
                since: since.clone(),
                ..Default::default()
            },
        );
    }

    // Articles the reader already has open take priority over fresh query
    // results.
    let now = Utc::now();
    let contextual_items: Vec<FeedItem> = request
        .context
        .as_ref()
        .map(|context| {
            provider
                .by_ids(&context.selected_ids)
                .into_iter()
                .map(|article| to_feed_item(article, now))
                .collect()
        })
        .unwrap_or_default();

    let mut items: Vec<FeedItem> = Vec::new();
    for item in contextual_items.into_iter().chain(feed.items) {
        if items.len() == 3 {
            break;
        }
        if items.iter().any(|kept| kept.article.id == item.article.id) {
            continue;
        }
        items.push(item);
    }
    if items.is_empty() {
        return no_results_response();
    }

    let answer_chunks: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let article = &item.article;
            let summary = match mode {
                SummaryMode::Expert => &article.summary.expert,
                SummaryMode::Beginner => &article.summary.beginner,
            };
            let why = article
                .summary
                .why_it_matters
                .iter()
                .map(|point| format!("• {}", point))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "{}. **{}** — {}\n{}\nSource: {} ({}, {}) → {}",
                index + 1,
                article.title,
                summary,
                why,
                article.source.name,
                article.source.domain,
                format_published_time(article.published_at),
                article.url,
            )
        })
        .collect();

    let answer = format!(
        "Here{} what I found{}:\n\n{}\n\nNeed more? I can help you {}.\n",
        if items.len() > 1 { " are" } else { "'s" },
        tag_from_message
            .map(|tag| format!(" on {}", tag))
            .unwrap_or_default(),
        answer_chunks.join("\n\n"),
        NEXT_STEPS.join(", "),
    );

    let citations: Vec<ChatCitation> = items
        .iter()
        .map(|item| ChatCitation {
            article_id: item.article.id.clone(),
            title: item.article.title.clone(),
            domain: item.article.source.domain.clone(),
            url: item.article.url.clone(),
            published_at: item.article.published_at,
        })
        .collect();

    let mut actions: Vec<String> = items
        .iter()
        .map(|item| format!("open:{}", item.article.url))
        .chain(items.iter().map(|item| format!("save:{}", item.article.id)))
        .collect();
    if let Some(tag) = tag_from_message {
        actions.push(format!("alert:{}", tag.to_lowercase()));
    }

    ChatResponse {
        answer,
        citations,
        actions,
        confidence: if items.len() >= 2 { Confidence::High } else { Confidence::Medium },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_detection_prefers_trending_over_policy_over_research() {
        assert_eq!(detect_sort("trending policy research"), Some(SortKey::Trending));
        assert_eq!(detect_sort("policy and research"), Some(SortKey::Policy));
        assert_eq!(detect_sort("latest research"), Some(SortKey::Research));
        assert_eq!(detect_sort("what's new"), None);
    }

    #[test]
    fn tag_detection_follows_table_order() {
        // "paper" (Research) appears before "law" (Policy) in the table,
        // whatever order the words take in the message.
        assert_eq!(detect_tag("new law about this paper"), Some("Research"));
        assert_eq!(detect_tag("alignment news and sdk releases"), Some("Safety"));
        assert_eq!(detect_tag("autonomous workflow updates"), Some("Agents"));
        assert_eq!(detect_tag("celebrity gossip"), None);
    }

    #[test]
    fn summary_mode_keywords_override_context() {
        assert_eq!(detect_summary_mode("give me the expert view", SummaryMode::Beginner), SummaryMode::Expert);
        assert_eq!(detect_summary_mode("explain like i'm 12", SummaryMode::Expert), SummaryMode::Beginner);
        assert_eq!(detect_summary_mode("anything else", SummaryMode::Expert), SummaryMode::Expert);
    }

    #[test]
    fn published_time_format_is_fixed() {
        let instant = chrono::DateTime::parse_from_rfc3339("2024-06-01T14:32:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_published_time(instant), "Jun 1, 2024 14:32 UTC");
    }
}
