use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{ApiError, ArticleSummary};
use crate::catalog;

#[derive(Debug, Serialize)]
pub struct SeriesSummary {
    pub name: String,
    pub slug: String,
    /// Member articles, ascending by upload date (reading order)
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Serialize)]
pub struct SeriesListResponse {
    pub series: Vec<SeriesSummary>,
}

/// Series groups, most recently updated series first.
pub async fn list_series(
    State(state): State<AppState>,
) -> Result<Json<SeriesListResponse>, ApiError> {
    let metas = state
        .store()
        .load()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let series = catalog::group_by_series(&metas)
        .into_iter()
        .map(|group| SeriesSummary {
            name: group.name,
            slug: group.slug,
            articles: group.articles.into_iter().map(ArticleSummary::from).collect(),
        })
        .collect();

    Ok(Json(SeriesListResponse { series }))
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, setup_app, write_article_full};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_series_groups_and_orders() {
        let (dir, app) = setup_app();
        write_article_full(dir.path(), "a.mdx", "Part Two", "2025-02-01", Some("Rust Deep Dive"), None);
        write_article_full(dir.path(), "b.mdx", "Part One", "2025-01-01", Some("Rust Deep Dive"), None);
        write_article_full(dir.path(), "c.mdx", "Old Entry", "2024-01-01", Some("Archive"), None);
        write_article_full(dir.path(), "d.mdx", "Standalone", "2025-03-01", None, None);

        let (status, json) = get_json(app, "/api/series").await;
        assert_eq!(status, StatusCode::OK);
        let series = json["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);

        // Most recently updated group first; the standalone article is a
        // singleton group
        assert_eq!(series[0]["slug"], "standalone");
        assert_eq!(series[1]["slug"], "rust-deep-dive");
        let members = series[1]["articles"].as_array().unwrap();
        assert_eq!(members[0]["title"], "Part One");
        assert_eq!(members[1]["title"], "Part Two");

        assert_eq!(series[2]["name"], "Archive");
    }

    #[tokio::test]
    async fn test_list_series_empty_catalog() {
        let (_dir, app) = setup_app();
        let (status, json) = get_json(app, "/api/series").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["series"].as_array().unwrap().is_empty());
    }
}
