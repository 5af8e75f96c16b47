use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use aw_core::{generate_chat_response, get_feed, ChatRequest, ChatResponse, Confidence, FeedFilters, SortKey};

use crate::AppState;

/// Builds feed filters out of the raw query string. `axum::extract::Query`
/// cannot collect repeated `tags[]`/`sources[]` keys into a Vec, so the
/// pairs are walked by hand.
fn parse_feed_filters(query: &str) -> FeedFilters {
    let mut filters = FeedFilters::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "search" => filters.search = Some(value),
            "tag" => filters.tag = Some(value),
            "tags[]" => filters.tags.push(value),
            "source" => filters.source = Some(value),
            "sources[]" => filters.sources.push(value),
            "since" => filters.since = Some(value),
            "sort" => filters.sort = SortKey::parse(&value),
            _ => {}
        }
    }
    filters
}

pub async fn feed(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> impl IntoResponse {
    let filters = parse_feed_filters(query.as_deref().unwrap_or(""));
    let result = get_feed(&state.catalog, &filters);
    info!(total = result.total, "served feed query");
    Json(result)
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => {
            let response = generate_chat_response(&state.catalog, &request);
            Json(response).into_response()
        }
        Err(rejection) => {
            warn!(%rejection, "rejected chat payload");
            let fallback = ChatResponse {
                answer: "Something went wrong while I tried to help. Please try again or adjust your question.".into(),
                citations: vec![],
                actions: vec![],
                confidence: Confidence::Low,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(fallback)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub item_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn missing_item_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(SaveResponse {
            ok: false,
            message: Some("Missing itemId".into()),
        }),
    )
        .into_response()
}

fn malformed_save_body() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SaveResponse { ok: false, message: None }),
    )
        .into_response()
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return malformed_save_body();
    };
    let Some(item_id) = request.item_id else {
        return missing_item_id();
    };
    state.saved.write().await.insert(item_id);
    Json(SaveResponse { ok: true, message: None }).into_response()
}

pub async fn unsave(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return malformed_save_body();
    };
    let Some(item_id) = request.item_id else {
        return missing_item_id();
    };
    state.saved.write().await.remove(&item_id);
    Json(SaveResponse { ok: true, message: None }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collect_into_vectors() {
        let filters = parse_feed_filters("tags[]=Safety&tags[]=Policy&sort=trending&search=agents");
        assert_eq!(filters.tags, vec!["Safety".to_string(), "Policy".to_string()]);
        assert_eq!(filters.sort, Some(SortKey::Trending));
        assert_eq!(filters.search.as_deref(), Some("agents"));
    }

    #[test]
    fn unknown_sort_values_are_dropped() {
        let filters = parse_feed_filters("sort=bogus");
        assert!(filters.sort.is_none());
    }
}
