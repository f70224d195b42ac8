//! Article metadata model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Frontmatter fields of an article document.
///
/// `title`, `summary` and `upload_at` are mandatory; a document missing any
/// of them fails the entire listing at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFrontmatter {
    /// Article title (slug source)
    pub title: String,

    /// One-paragraph summary shown in listings
    pub summary: String,

    /// Publication date
    pub upload_at: NaiveDate,

    /// Author display name
    pub author: Option<String>,

    /// Thumbnail image URL or path
    pub thumbnail: Option<String>,

    /// Free-form tags, searchable
    #[serde(default)]
    pub tags: Vec<String>,

    /// Series name this article belongs to
    pub series: Option<String>,

    /// Editorial rank for the featured selection (lower = first)
    pub featured: Option<i64>,
}

/// Frontmatter plus fields derived during a listing pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMeta {
    #[serde(flatten)]
    pub frontmatter: ArticleFrontmatter,

    /// URL-safe identifier, unique within one listing pass
    pub slug: String,

    /// Path to the source document
    pub file_path: PathBuf,
}

impl ArticleMeta {
    /// Case-insensitive substring match over title, summary, author and
    /// joined tags.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        let fm = &self.frontmatter;
        if fm.title.to_lowercase().contains(query_lower) {
            return true;
        }
        if fm.summary.to_lowercase().contains(query_lower) {
            return true;
        }
        if let Some(ref author) = fm.author {
            if author.to_lowercase().contains(query_lower) {
                return true;
            }
        }
        fm.tags.join(" ").to_lowercase().contains(query_lower)
    }
}
