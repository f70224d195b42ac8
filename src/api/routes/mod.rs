pub mod articles;
pub mod search;
pub mod series;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::api::state::AppState;
    use crate::api::build_router;
    use crate::config::AppConfig;

    /// Router over a fresh temp content directory.
    pub fn setup_app() -> (TempDir, axum::Router) {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.content_dir = dir.path().to_path_buf();
        config.tools_path = dir.path().join("tools.yaml");
        let app = build_router(AppState::new(config));
        (dir, app)
    }

    pub fn write_article(dir: &Path, file: &str, title: &str, date: &str) {
        let content = format!(
            "---\ntitle: {}\nsummary: Summary of {}\nuploadAt: {}\n---\n# Heading\n\nBody of {}.\n",
            title, title, date, title
        );
        std::fs::write(dir.join(file), content).unwrap();
    }

    pub fn write_article_full(
        dir: &Path,
        file: &str,
        title: &str,
        date: &str,
        series: Option<&str>,
        featured: Option<i64>,
    ) {
        let mut content = format!(
            "---\ntitle: {}\nsummary: Summary of {}\nuploadAt: {}\n",
            title, title, date
        );
        if let Some(series) = series {
            content.push_str(&format!("series: {}\n", series));
        }
        if let Some(rank) = featured {
            content.push_str(&format!("featured: {}\n", rank));
        }
        content.push_str("---\nBody.\n");
        std::fs::write(dir.join(file), content).unwrap();
    }

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }
}
