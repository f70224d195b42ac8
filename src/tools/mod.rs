//! Tools directory loading and validation.
//!
//! The tools listing is a single `tools.yaml` file. Loading schema-checks
//! every entry, attaches the name-derived hash ID and rejects ID
//! collisions. The `validate-tools` CLI subcommand runs the same checks
//! offline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::{Tool, ToolData, ToolId};

/// Tools directory errors.
#[derive(Debug, Error)]
pub enum ToolsError {
    #[error("Failed to read tools file: {0}")]
    Io(#[from] std::io::Error),

    #[error("tools.yaml schema validation failed: {0}")]
    Schema(#[from] serde_yaml::Error),

    #[error("tools.yaml entry \"{name}\": invalid field `{field}`")]
    InvalidField { name: String, field: String },

    #[error("tools.yaml has colliding ids (name hash collision or duplicate name):\n{}", details.join("\n"))]
    IdCollision { details: Vec<String> },
}

/// Load and validate the tools listing.
pub fn load_tools(path: &Path) -> Result<Vec<Tool>, ToolsError> {
    let raw = fs::read_to_string(path)?;
    let entries: Vec<ToolData> = serde_yaml::from_str(&raw)?;

    for entry in &entries {
        if let Err(field) = entry.check_fields() {
            return Err(ToolsError::InvalidField {
                name: entry.name.clone(),
                field: field.to_string(),
            });
        }
    }

    let tools = attach_ids(entries)?;
    debug!("Loaded {} tools from {:?}", tools.len(), path);
    Ok(tools)
}

/// Attach hash IDs, collecting every collision before failing.
fn attach_ids(entries: Vec<ToolData>) -> Result<Vec<Tool>, ToolsError> {
    let mut seen: HashMap<ToolId, String> = HashMap::new();
    let mut details = Vec::new();

    let tools: Vec<Tool> = entries
        .into_iter()
        .map(|data| {
            let tool = Tool::from_data(data);
            match seen.get(&tool.id) {
                Some(existing) => details.push(format!(
                    "- id=\"{}\": \"{}\" / \"{}\"",
                    tool.id, existing, tool.data.name
                )),
                None => {
                    seen.insert(tool.id.clone(), tool.data.name.clone());
                }
            }
            tool
        })
        .collect();

    if details.is_empty() {
        Ok(tools)
    } else {
        Err(ToolsError::IdCollision { details })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToolStatus;
    use tempfile::TempDir;

    const VALID_YAML: &str = "\
- name: Grafana
  description: Dashboards
  url: https://grafana.example.com
  status: public
- name: Vault
  description: Secrets
  url: https://vault.example.com
  status: internal
  note: VPN only
";

    fn write_tools(yaml: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tools.yaml");
        fs::write(&path, yaml).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_tools() {
        let (_dir, path) = write_tools(VALID_YAML);
        let tools = load_tools(&path).unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].data.name, "Grafana");
        assert_eq!(tools[1].data.status, ToolStatus::Internal);
        assert_eq!(tools[0].id, ToolId::from_name("Grafana"));
    }

    #[test]
    fn test_load_rejects_bad_status() {
        let (_dir, path) = write_tools(
            "- name: X\n  description: Y\n  url: https://x.dev\n  status: secret\n",
        );
        assert!(matches!(load_tools(&path), Err(ToolsError::Schema(_))));
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let (_dir, path) = write_tools(
            "- name: X\n  description: Y\n  url: https://x.dev\n  status: public\n  owner: me\n",
        );
        assert!(matches!(load_tools(&path), Err(ToolsError::Schema(_))));
    }

    #[test]
    fn test_load_rejects_invalid_url() {
        let (_dir, path) = write_tools(
            "- name: X\n  description: Y\n  url: ftp://x.dev\n  status: public\n",
        );
        let err = load_tools(&path).unwrap_err();
        match err {
            ToolsError::InvalidField { name, field } => {
                assert_eq!(name, "X");
                assert_eq!(field, "url");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_rejects_duplicate_names() {
        let (_dir, path) = write_tools(
            "- name: Same\n  description: A\n  url: https://a.dev\n  status: public\n\
             - name: Same\n  description: B\n  url: https://b.dev\n  status: public\n",
        );
        let err = load_tools(&path).unwrap_err();
        match err {
            ToolsError::IdCollision { details } => {
                assert_eq!(details.len(), 1);
                assert!(details[0].contains("Same"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_tools(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ToolsError::Io(_))));
    }
}
