//! REST API endpoints.
//!
//! Axum-based HTTP API over the article catalog and the tools directory.
//! Every request re-reads content from disk; there is no shared cache, so
//! no cross-request consistency concerns.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::models::ArticleMeta;

pub mod routes;
pub mod state;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Article fields exposed in listings and search results.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub title: String,
    pub summary: String,
    pub upload_at: String,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
    pub series: Option<String>,
    pub featured: Option<i64>,
    pub slug: String,
}

impl From<ArticleMeta> for ArticleSummary {
    fn from(meta: ArticleMeta) -> Self {
        let fm = meta.frontmatter;
        Self {
            title: fm.title,
            summary: fm.summary,
            upload_at: fm.upload_at.to_string(),
            author: fm.author,
            thumbnail: fm.thumbnail,
            tags: fm.tags,
            series: fm.series,
            featured: fm.featured,
            slug: meta.slug,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/api/search", get(routes::search::search_articles))
        .route("/api/articles", get(routes::articles::list_articles))
        .route("/api/articles/:slug", get(routes::articles::get_article))
        .route("/api/article/:id", get(routes::articles::get_article_by_id))
        .route("/api/featured", get(routes::articles::list_featured))
        .route("/api/series", get(routes::series::list_series))
        .route("/api/tools", get(routes::tools::list_tools))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::new().allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new().allow_origin(value),
        Err(_) => {
            warn!("Invalid cors_origin {:?}, allowing any origin", origin);
            CorsLayer::new().allow_origin(Any)
        }
    }
}
