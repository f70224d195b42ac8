use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, ArticleSummary};
use crate::catalog;
use crate::content::render_html;
use crate::models::ArticleMeta;

#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Pagination block of the listing response.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummary>,
    pub pagination: PaginationMeta,
}

/// Paginated catalog listing, most recent first.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let mut metas = state
        .store()
        .load()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    catalog::sort_by_recency(&mut metas);

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.config.catalog.page_size);
    let page = catalog::paginate(metas, page, page_size);

    Ok(Json(ArticleListResponse {
        articles: page.items.into_iter().map(ArticleSummary::from).collect(),
        pagination: PaginationMeta {
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_count: page.total_count,
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub meta: ArticleSummary,
    /// Article body rendered to HTML
    pub html: String,
}

/// Article detail by slug, with the body rendered to HTML.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let store = state.store();
    let meta = store
        .find_by_slug(&slug)
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound(format!("Article not found: {}", slug)))?;

    detail_response(&state, meta)
}

/// Legacy numeric-id route: `id` is the 1-based position in the
/// recency-sorted listing.
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    if id == 0 {
        return Err(ApiError::BadRequest("Article id starts at 1".to_string()));
    }

    let mut metas = state
        .store()
        .load()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    catalog::sort_by_recency(&mut metas);

    if id > metas.len() {
        return Err(ApiError::NotFound(format!("Article not found: {}", id)));
    }
    detail_response(&state, metas.swap_remove(id - 1))
}

fn detail_response(
    state: &AppState,
    meta: ArticleMeta,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let body = state
        .store()
        .read_body(&meta)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(ArticleDetailResponse {
        meta: ArticleSummary::from(meta),
        html: render_html(&body),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedResponse {
    pub articles: Vec<ArticleSummary>,
}

/// Editorially promoted articles, rank ascending.
pub async fn list_featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<FeaturedResponse>, ApiError> {
    let metas = state
        .store()
        .load()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let limit = params.limit.unwrap_or(state.config.catalog.recommended_limit);
    let articles = catalog::featured(&metas, limit)
        .into_iter()
        .map(ArticleSummary::from)
        .collect();

    Ok(Json(FeaturedResponse { articles }))
}
