//! Feed engine: deduplicate by cluster, filter, rank, enrich.
//!
//! Every query takes one wall-clock snapshot and derives all recency math
//! from it; nothing computed here is cached between calls.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use crate::catalog::ArticleProvider;
use crate::types::{Article, FeedFilters, FeedItem, FeedResult, SortKey};

/// Weighted blend of recency decay, engagement, and authority. The recency
/// term is the reciprocal of whole hours since publish, floored at one hour
/// so brand-new stories cannot blow up the score.
pub(crate) fn composite_score(article: &Article, now: DateTime<Utc>) -> f64 {
    let hours = (now - article.published_at).num_hours().max(1) as f64;
    (1.0 / hours) * 0.4 + article.engagement_score * 0.35 + article.authority_score * 0.25
}

/// Keeps the strongest member of each cluster. Replacement requires a
/// strictly greater score, so ties keep the first article encountered, and
/// clusters stay in first-seen order for the stable sort downstream.
fn dedupe_articles<'a>(articles: &'a [Article], now: DateTime<Utc>) -> Vec<&'a Article> {
    let mut representatives: Vec<&'a Article> = Vec::new();
    for article in articles {
        match representatives
            .iter()
            .position(|kept| kept.cluster_id == article.cluster_id)
        {
            Some(index) => {
                if composite_score(article, now) > composite_score(representatives[index], now) {
                    representatives[index] = article;
                }
            }
            None => representatives.push(article),
        }
    }
    representatives
}

fn matches_search(article: &Article, search: Option<&str>) -> bool {
    let Some(search) = search else { return true };
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {} {} {}",
        article.title,
        article.excerpt,
        article.summary.beginner,
        article.summary.expert,
        article.tags.join(" "),
        article.topics.join(" "),
    )
    .to_lowercase();
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| {
            term.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .filter(|term| term.len() > 2)
        .collect();
    if terms.is_empty() {
        return haystack.contains(&query);
    }
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

fn matches_since(article: &Article, since: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(since) = since else { return true };
    let normalized = since.trim().to_lowercase();
    if let Some(prefix) = normalized.strip_suffix('h') {
        return match prefix.parse::<i64>() {
            Ok(hours) => article.published_at > now - Duration::hours(hours),
            Err(_) => true,
        };
    }
    if let Some(prefix) = normalized.strip_suffix('d') {
        return match prefix.parse::<i64>() {
            Ok(days) => article.published_at > now - Duration::days(days),
            Err(_) => true,
        };
    }
    true
}

fn matches_sources(article: &Article, filters: &FeedFilters) -> bool {
    if filters.source.is_none() && filters.sources.is_empty() {
        return true;
    }
    let mut allowed = BTreeSet::new();
    if let Some(source) = &filters.source {
        allowed.insert(source.to_lowercase());
    }
    for source in &filters.sources {
        allowed.insert(source.to_lowercase());
    }
    allowed.contains(&article.source.name.to_lowercase())
        || allowed.contains(&article.source.domain.to_lowercase())
}

fn matches_tags(article: &Article, filters: &FeedFilters) -> bool {
    let mut requested = BTreeSet::new();
    if let Some(tag) = &filters.tag {
        requested.insert(tag.to_lowercase());
    }
    for tag in &filters.tags {
        requested.insert(tag.to_lowercase());
    }
    if requested.is_empty() {
        return true;
    }
    article
        .tags
        .iter()
        .any(|tag| requested.contains(&tag.to_lowercase()))
}

/// Priority key for the requested sort strategy, higher first. The research
/// and policy strategies boost matching stories above everything else but
/// never exclude the rest.
fn sort_priority(sort: SortKey, article: &Article, now: DateTime<Utc>) -> f64 {
    match sort {
        SortKey::Latest => article.published_at.timestamp_millis() as f64,
        SortKey::Trending => composite_score(article, now),
        SortKey::Research => {
            let bonus = if article.tags.iter().any(|t| t == "Research") { 100.0 } else { 0.0 };
            bonus + composite_score(article, now)
        }
        SortKey::Policy => {
            let bonus = if article.tags.iter().any(|t| t == "Policy") { 100.0 } else { 0.0 };
            bonus + composite_score(article, now)
        }
    }
}

fn format_time_ago(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published_at).num_seconds().max(0);
    let (value, unit) = if seconds < 60 {
        (seconds, "second")
    } else if seconds < 3600 {
        ((seconds + 30) / 60, "minute")
    } else if seconds < 86_400 {
        ((seconds + 1800) / 3600, "hour")
    } else if seconds < 30 * 86_400 {
        ((seconds + 43_200) / 86_400, "day")
    } else if seconds < 365 * 86_400 {
        (seconds / (30 * 86_400), "month")
    } else {
        (seconds / (365 * 86_400), "year")
    };
    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

pub(crate) fn to_feed_item(article: &Article, now: DateTime<Utc>) -> FeedItem {
    FeedItem {
        article: article.clone(),
        time_ago: format_time_ago(article.published_at, now),
        // Always the trending formula, whatever sort was requested.
        score: composite_score(article, now),
    }
}

/// Runs the full pipeline against the provider's corpus. Total and
/// permissive: unknown or malformed filter values are treated as absent.
pub fn get_feed(provider: &dyn ArticleProvider, filters: &FeedFilters) -> FeedResult {
    let now = Utc::now();
    let deduped = dedupe_articles(provider.all(), now);

    let filtered: Vec<&Article> = deduped
        .iter()
        .copied()
        .filter(|article| {
            matches_search(article, filters.search.as_deref())
                && matches_tags(article, filters)
                && matches_sources(article, filters)
                && matches_since(article, filters.since.as_deref(), now)
        })
        .collect();

    let sort = filters.sort.unwrap_or(SortKey::Latest);
    let mut keyed: Vec<(f64, &Article)> = filtered
        .into_iter()
        .map(|article| (sort_priority(sort, article, now), article))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let items: Vec<FeedItem> = keyed
        .into_iter()
        .map(|(_, article)| to_feed_item(article, now))
        .collect();

    // Filter universe comes from the deduplicated set, not the filtered one,
    // so the UI can always offer every tag and source.
    let available_tags: Vec<String> = deduped
        .iter()
        .flat_map(|article| article.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let available_sources: Vec<String> = deduped
        .iter()
        .map(|article| article.source.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    FeedResult {
        total: items.len(),
        items,
        available_tags,
        available_sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArticleCatalog;
    use crate::types::{ArticleSummary, SourceInfo};

    fn article(id: &str, cluster: &str, tags: &[&str], hours_ago: i64, engagement: f64, authority: f64) -> Article {
        Article {
            id: id.into(),
            title: format!("{} title", id),
            url: format!("https://example.com/{}", id),
            source: SourceInfo {
                name: format!("{} source", id),
                domain: "example.com".into(),
            },
            published_at: Utc::now() - Duration::hours(hours_ago),
            summary: ArticleSummary {
                beginner: format!("{} beginner summary", id),
                expert: format!("{} expert summary", id),
                why_it_matters: vec!["matters".into()],
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            topics: vec![],
            cluster_id: cluster.into(),
            engagement_score: engagement,
            authority_score: authority,
            excerpt: format!("{} excerpt", id),
        }
    }

    #[test]
    fn composite_score_floors_recency_at_one_hour() {
        let now = Utc::now();
        let fresh = article("fresh", "c1", &[], 0, 0.0, 0.0);
        let hour_old = article("old", "c2", &[], 1, 0.0, 0.0);
        assert_eq!(composite_score(&fresh, now), composite_score(&hour_old, now));
        assert!((composite_score(&fresh, now) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn dedupe_keeps_highest_scoring_cluster_member() {
        let articles = vec![
            article("weak", "shared", &[], 20, 0.1, 0.1),
            article("strong", "shared", &[], 1, 0.9, 0.9),
            article("solo", "other", &[], 5, 0.5, 0.5),
        ];
        let now = Utc::now();
        let deduped = dedupe_articles(&articles, now);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, "strong");
        assert_eq!(deduped[1].id, "solo");
    }

    #[test]
    fn dedupe_ties_keep_first_encountered() {
        let articles = vec![
            article("first", "shared", &[], 5, 0.5, 0.5),
            article("second", "shared", &[], 5, 0.5, 0.5),
        ];
        let deduped = dedupe_articles(&articles, Utc::now());
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].id, "first");
    }

    #[test]
    fn search_matches_any_token() {
        let a = article("rag-item", "c1", &[], 2, 0.5, 0.5);
        assert!(matches_search(&a, Some("rag latency nonsense")));
        assert!(!matches_search(&a, Some("quantum cheese")));
    }

    #[test]
    fn short_tokens_fall_back_to_raw_substring() {
        let mut a = article("abbr", "c1", &[], 2, 0.5, 0.5);
        a.title = "AI at the UN".into();
        // Every token is two characters or fewer, so the whole trimmed query
        // must appear verbatim.
        assert!(matches_search(&a, Some("ai at")));
        assert!(matches_search(&a, Some("ai")));
        assert!(!matches_search(&a, Some("un ai")));
    }

    #[test]
    fn blank_search_passes_everything() {
        let a = article("any", "c1", &[], 2, 0.5, 0.5);
        assert!(matches_search(&a, Some("   ")));
        assert!(matches_search(&a, None));
    }

    #[test]
    fn since_window_is_strict_and_permissive_on_garbage() {
        let now = Utc::now();
        let recent = article("recent", "c1", &[], 2, 0.5, 0.5);
        let stale = article("stale", "c2", &[], 50, 0.5, 0.5);
        assert!(matches_since(&recent, Some("24h"), now));
        assert!(!matches_since(&stale, Some("24h"), now));
        assert!(matches_since(&stale, Some("7d"), now));
        assert!(matches_since(&stale, Some("soon"), now));
        assert!(matches_since(&stale, Some("h"), now));
        assert!(matches_since(&stale, None, now));
    }

    #[test]
    fn latest_sort_orders_by_publish_time() {
        let catalog = ArticleCatalog::new(vec![
            article("older", "c1", &[], 10, 0.9, 0.9),
            article("newer", "c2", &[], 1, 0.1, 0.1),
        ]);
        let result = get_feed(&catalog, &FeedFilters { sort: Some(SortKey::Latest), ..Default::default() });
        assert_eq!(result.items[0].article.id, "newer");
        assert_eq!(result.items[1].article.id, "older");
    }

    #[test]
    fn research_sort_boosts_but_does_not_exclude() {
        let catalog = ArticleCatalog::new(vec![
            article("plain", "c1", &["Industry"], 1, 0.9, 0.9),
            article("paper", "c2", &["Research"], 20, 0.1, 0.1),
        ]);
        let result = get_feed(&catalog, &FeedFilters { sort: Some(SortKey::Research), ..Default::default() });
        assert_eq!(result.total, 2);
        assert_eq!(result.items[0].article.id, "paper");
    }

    #[test]
    fn tag_filter_is_case_insensitive() {
        let catalog = ArticleCatalog::new(vec![
            article("tagged", "c1", &["Safety"], 1, 0.5, 0.5),
            article("untagged", "c2", &["Industry"], 1, 0.5, 0.5),
        ]);
        let result = get_feed(&catalog, &FeedFilters { tag: Some("safety".into()), ..Default::default() });
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].article.id, "tagged");
    }

    #[test]
    fn source_filter_accepts_name_or_domain() {
        let catalog = ArticleCatalog::new(vec![
            article("match", "c1", &[], 1, 0.5, 0.5),
            {
                let mut other = article("other", "c2", &[], 1, 0.5, 0.5);
                other.source.domain = "elsewhere.org".into();
                other
            },
        ]);
        let by_domain = get_feed(&catalog, &FeedFilters { source: Some("EXAMPLE.COM".into()), ..Default::default() });
        assert_eq!(by_domain.total, 1);
        assert_eq!(by_domain.items[0].article.id, "match");
        let by_name = get_feed(&catalog, &FeedFilters { sources: vec!["match source".into()], ..Default::default() });
        assert_eq!(by_name.total, 1);
    }

    #[test]
    fn available_universe_ignores_active_filters() {
        let catalog = ArticleCatalog::new(vec![
            article("a", "c1", &["Safety"], 1, 0.5, 0.5),
            article("b", "c2", &["Policy"], 1, 0.5, 0.5),
        ]);
        let result = get_feed(&catalog, &FeedFilters { tag: Some("Safety".into()), ..Default::default() });
        assert_eq!(result.total, 1);
        assert_eq!(result.available_tags, vec!["Policy".to_string(), "Safety".to_string()]);
        assert_eq!(result.available_sources.len(), 2);
    }

    #[test]
    fn unknown_tag_yields_empty_result() {
        let catalog = ArticleCatalog::seeded();
        let result = get_feed(&catalog, &FeedFilters { tag: Some("NonexistentTag".into()), ..Default::default() });
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn time_ago_reads_naturally() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::minutes(30), now), "30 minutes ago");
        assert_eq!(format_time_ago(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_time_ago(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(format_time_ago(now - Duration::seconds(5), now), "5 seconds ago");
    }

    #[test]
    fn score_is_reported_even_under_latest_sort() {
        let catalog = ArticleCatalog::new(vec![article("a", "c1", &[], 2, 0.8, 0.6)]);
        let result = get_feed(&catalog, &FeedFilters { sort: Some(SortKey::Latest), ..Default::default() });
        let item = &result.items[0];
        let expected = (1.0 / 2.0) * 0.4 + 0.8 * 0.35 + 0.6 * 0.25;
        assert!((item.score - expected).abs() < 1e-6);
    }
}
