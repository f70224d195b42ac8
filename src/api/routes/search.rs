use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, ArticleSummary};
use crate::catalog;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub articles: Vec<ArticleSummary>,
}

/// Free-text search over the catalog.
///
/// An empty or missing query returns the recommended selection rather
/// than the full catalog (the search overlay's fallback list).
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let metas = state
        .store()
        .load()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let query = params.query.as_deref().unwrap_or("").trim();
    let hits = if query.is_empty() {
        catalog::recommended(&metas, state.config.catalog.recommended_limit)
    } else {
        let mut found = catalog::search(&metas, query);
        catalog::sort_by_recency(&mut found);
        found
    };

    let articles = hits.into_iter().map(ArticleSummary::from).collect();
    Ok(Json(SearchResponse { articles }))
}
