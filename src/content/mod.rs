//! Content pipeline: reading and parsing article documents.
//!
//! Articles are markdown/MDX files with a YAML frontmatter block under a
//! content directory. The whole directory is listed and parsed fresh on
//! every call; a single malformed document aborts the entire listing.

mod frontmatter;
mod slug;
mod store;

pub use frontmatter::{split_frontmatter, SplitError};
pub use slug::{slugify, SlugAssigner};
pub use store::{render_html, ArticleStore};

use std::path::PathBuf;
use thiserror::Error;

/// Content pipeline errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("{path}: document has no frontmatter block")]
    MissingFrontmatter { path: PathBuf },

    #[error("{path}: frontmatter block is not terminated")]
    UnterminatedFrontmatter { path: PathBuf },

    #[error("{path}: invalid frontmatter: {source}")]
    InvalidFrontmatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
