//! Article store reader.
//!
//! Lists and parses every document under the content directory. Reads are
//! fresh per call; the corpus is small, static and author-controlled, so a
//! single malformed document fails the whole listing rather than being
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

use super::frontmatter::{split_frontmatter, SplitError};
use super::slug::SlugAssigner;
use super::ContentError;
use crate::models::{ArticleFrontmatter, ArticleMeta};

/// Reader over a directory of `*.md` / `*.mdx` article documents.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    content_dir: PathBuf,
}

impl ArticleStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// List and parse all article documents.
    ///
    /// Documents are visited in file-name order so slug disambiguation is
    /// deterministic for a given directory state. Any missing required
    /// frontmatter field aborts the entire listing.
    pub fn load(&self) -> Result<Vec<ArticleMeta>, ContentError> {
        let mut paths = self.document_paths()?;
        paths.sort();

        let mut slugs = SlugAssigner::new();
        let mut metas = Vec::with_capacity(paths.len());

        for path in paths {
            let raw = fs::read_to_string(&path)?;
            let frontmatter = parse_frontmatter(&path, &raw)?;
            let slug = slugs.assign(&frontmatter.title);
            metas.push(ArticleMeta {
                frontmatter,
                slug,
                file_path: path,
            });
        }

        debug!("Loaded {} articles from {:?}", metas.len(), self.content_dir);
        Ok(metas)
    }

    /// Find one article by its listing slug.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<ArticleMeta>, ContentError> {
        let metas = self.load()?;
        Ok(metas.into_iter().find(|m| m.slug == slug))
    }

    /// Read the markdown body of an article (frontmatter stripped).
    pub fn read_body(&self, meta: &ArticleMeta) -> Result<String, ContentError> {
        let raw = fs::read_to_string(&meta.file_path)?;
        let (_, body) = split_frontmatter(&raw).map_err(|e| split_error(&meta.file_path, e))?;
        Ok(body.to_string())
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>, ContentError> {
        let mut paths = Vec::new();
        for ext in ["md", "mdx"] {
            let pattern = format!("{}/*.{}", self.content_dir.display(), ext);
            for entry in glob::glob(&pattern)? {
                paths.push(entry?);
            }
        }
        Ok(paths)
    }
}

fn parse_frontmatter(path: &Path, raw: &str) -> Result<ArticleFrontmatter, ContentError> {
    let (yaml, _) = split_frontmatter(raw).map_err(|e| split_error(path, e))?;
    serde_yaml::from_str(yaml).map_err(|source| ContentError::InvalidFrontmatter {
        path: path.to_path_buf(),
        source,
    })
}

fn split_error(path: &Path, err: SplitError) -> ContentError {
    match err {
        SplitError::Missing => ContentError::MissingFrontmatter {
            path: path.to_path_buf(),
        },
        SplitError::Unterminated => ContentError::UnterminatedFrontmatter {
            path: path.to_path_buf(),
        },
    }
}

/// Render a markdown body to HTML.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
