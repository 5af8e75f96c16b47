use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary verbosity requested by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Beginner,
    Expert,
}

impl Default for SummaryMode {
    fn default() -> Self {
        SummaryMode::Beginner
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub beginner: String,
    pub expert: String,
    pub why_it_matters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    pub domain: String,
}

/// A single story in the corpus. Articles are seeded once at startup and
/// never mutated afterwards; everything derived from them is recomputed per
/// query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: SourceInfo,
    pub published_at: DateTime<Utc>,
    pub summary: ArticleSummary,
    pub tags: Vec<String>,
    pub topics: Vec<String>,
    /// Near-duplicate stories covering the same event share a cluster id;
    /// only the strongest member of a cluster is ever shown.
    pub cluster_id: String,
    pub engagement_score: f64,
    pub authority_score: f64,
    pub excerpt: String,
}

/// Named ranking strategies accepted by the feed engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Latest,
    Trending,
    Research,
    Policy,
}

impl SortKey {
    /// Permissive parse: unknown values mean "no preference" rather than an
    /// error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "latest" => Some(SortKey::Latest),
            "trending" => Some(SortKey::Trending),
            "research" => Some(SortKey::Research),
            "policy" => Some(SortKey::Policy),
            _ => None,
        }
    }
}

/// Feed query. Every field is optional; absent or malformed values are
/// treated as "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

/// An article enriched for display: relative publish time plus the composite
/// score, both computed against the wall clock at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(flatten)]
    pub article: Article,
    pub time_ago: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResult {
    pub items: Vec<FeedItem>,
    pub total: usize,
    pub available_tags: Vec<String>,
    pub available_sources: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_mode: Option<SummaryMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Coerced to an empty string when the payload carries a non-string
    /// value, so a sloppy client still gets the clarification answer
    /// instead of an error.
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ChatContext>,
}

fn lenient_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(message) => message,
        _ => String::new(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatCitation {
    pub article_id: String,
    pub title: String,
    pub domain: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// How many distinct articles backed the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub answer: String,
    pub citations: Vec<ChatCitation>,
    pub actions: Vec<String>,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_message_coerces_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": 42}"#).unwrap();
        assert_eq!(request.message, "");
        let request: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert_eq!(request.message, "");
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, "");
    }

    #[test]
    fn string_message_passes_through() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "hi", "context": {"summaryMode": "expert"}}"#)
                .unwrap();
        assert_eq!(request.message, "hi");
        assert_eq!(
            request.context.unwrap().summary_mode,
            Some(SummaryMode::Expert)
        );
    }
}
