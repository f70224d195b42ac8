//! Series grouping model.

use serde::{Deserialize, Serialize};

use super::ArticleMeta;

/// A named, ordered sequence of related articles.
///
/// Derived from the full article set on each request, never stored.
/// Articles are ordered ascending by `upload_at` (reading order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesGroup {
    /// Series display name
    pub name: String,

    /// URL-safe series identifier
    pub slug: String,

    /// Member articles, ascending by upload date
    pub articles: Vec<ArticleMeta>,
}
