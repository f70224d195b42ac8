use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Tool;
use crate::tools::load_tools;

#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<Tool>,
}

/// Validated tools listing.
pub async fn list_tools(State(state): State<AppState>) -> Result<Json<ToolListResponse>, ApiError> {
    let tools =
        load_tools(&state.config.tools_path).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(ToolListResponse { tools }))
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, setup_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_tools() {
        let (dir, app) = setup_app();
        std::fs::write(
            dir.path().join("tools.yaml"),
            "- name: Grafana\n  description: Dashboards\n  url: https://grafana.example.com\n  status: public\n",
        )
        .unwrap();

        let (status, json) = get_json(app, "/api/tools").await;
        assert_eq!(status, StatusCode::OK);
        let tools = json["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "Grafana");
        assert_eq!(tools[0]["id"].as_str().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_list_tools_schema_failure_is_internal_error() {
        let (dir, app) = setup_app();
        std::fs::write(
            dir.path().join("tools.yaml"),
            "- name: Broken\n  status: public\n",
        )
        .unwrap();

        let (status, json) = get_json(app, "/api/tools").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
