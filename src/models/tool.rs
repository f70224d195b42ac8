//! Tools directory models.
//!
//! Entries come from a `tools.yaml` file and are schema-validated at load
//! time; IDs are derived from the tool name hash.

use serde::{Deserialize, Serialize};

use super::ToolId;

/// Publication status of a tool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Public,
    Internal,
    Blocked,
}

/// A raw tool entry as written in `tools.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToolData {
    pub name: String,
    pub description: String,
    pub url: String,
    pub status: ToolStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl ToolData {
    /// Field-level checks beyond what serde enforces structurally.
    /// Returns the offending field name on failure.
    ///
    /// `url` must be http(s): stricter than a generic absolute-URL check,
    /// since every directory entry is a web link opened from a browser.
    pub fn check_fields(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name");
        }
        if self.description.trim().is_empty() {
            return Err("description");
        }
        if self.url.trim().is_empty() {
            return Err("url");
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("url");
        }
        if self.note.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err("note");
        }
        if self.icon_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err("iconUrl");
        }
        Ok(())
    }
}

/// A validated tool entry with its derived ID attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,

    #[serde(flatten)]
    pub data: ToolData,
}

impl Tool {
    /// Attach the name-derived ID to a validated entry.
    pub fn from_data(data: ToolData) -> Self {
        let id = ToolId::from_name(&data.name);
        Self { id, data }
    }
}
