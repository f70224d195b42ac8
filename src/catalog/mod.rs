//! Query layer over the article catalog.
//!
//! Pure in-memory shaping of loaded article metadata: recency sort,
//! pagination, free-text search, series grouping and the featured /
//! recommended selections. Framework-free so both the HTTP routes and the
//! CLI share it.

use std::collections::HashMap;

use serde::Serialize;

use crate::content::slugify;
use crate::models::{ArticleMeta, SeriesGroup};

/// One window of a paginated listing.
///
/// `current_page` is always within `[1, max(total_pages, 1)]`, even when
/// the requested page was out of range.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Sort articles by `upload_at` descending. Stable: ties keep input order.
pub fn sort_by_recency(metas: &mut [ArticleMeta]) {
    metas.sort_by(|a, b| b.frontmatter.upload_at.cmp(&a.frontmatter.upload_at));
}

/// Slice out one page, clamping the requested page into range.
pub fn paginate<T>(mut items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let current_page = page.clamp(1, total_pages.max(1));

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let items: Vec<T> = if start < total_count {
        items.truncate(end);
        items.drain(start..).collect()
    } else {
        Vec::new()
    };

    Page {
        items,
        current_page,
        total_pages,
        total_count,
    }
}

/// Case-insensitive substring search over title, summary, author and tags.
///
/// An empty or whitespace-only query yields an empty result, not the full
/// catalog; callers substitute the recommended selection instead.
pub fn search(metas: &[ArticleMeta], query: &str) -> Vec<ArticleMeta> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    metas
        .iter()
        .filter(|m| m.matches_query(&query))
        .cloned()
        .collect()
}

/// Group articles by series.
///
/// Articles sharing a series are bucketed under its slug; an article
/// without a series becomes its own singleton group, so flattening the
/// groups always yields the full input set. Within a group articles run
/// ascending by `upload_at` (reading order); groups are ordered by their
/// most recent article, descending.
pub fn group_by_series(metas: &[ArticleMeta]) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for meta in metas {
        // Namespaced keys so a standalone article whose title matches a
        // series name never merges into that series.
        let (key, name, slug) = match meta.frontmatter.series {
            Some(ref series) => (format!("s:{}", slugify(series)), series.clone(), slugify(series)),
            None => (
                format!("a:{}", meta.slug),
                meta.frontmatter.title.clone(),
                meta.slug.clone(),
            ),
        };
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(SeriesGroup {
                name,
                slug,
                articles: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].articles.push(meta.clone());
    }

    for group in &mut groups {
        group
            .articles
            .sort_by(|a, b| a.frontmatter.upload_at.cmp(&b.frontmatter.upload_at));
    }
    groups.sort_by(|a, b| {
        let latest = |g: &SeriesGroup| g.articles.iter().map(|m| m.frontmatter.upload_at).max();
        latest(b).cmp(&latest(a))
    });
    groups
}

/// Editorially promoted articles: rank ascending, recency breaking ties.
pub fn featured(metas: &[ArticleMeta], limit: usize) -> Vec<ArticleMeta> {
    let mut picked: Vec<ArticleMeta> = metas
        .iter()
        .filter(|m| m.frontmatter.featured.is_some())
        .cloned()
        .collect();
    picked.sort_by(|a, b| {
        a.frontmatter
            .featured
            .cmp(&b.frontmatter.featured)
            .then_with(|| b.frontmatter.upload_at.cmp(&a.frontmatter.upload_at))
    });
    picked.truncate(limit);
    picked
}

/// Empty-query fallback: featured articles first, backfilled with the most
/// recent remaining articles up to `limit`.
pub fn recommended(metas: &[ArticleMeta], limit: usize) -> Vec<ArticleMeta> {
    let mut picked = featured(metas, limit);

    let mut rest: Vec<ArticleMeta> = metas.to_vec();
    sort_by_recency(&mut rest);
    for meta in rest {
        if picked.len() >= limit {
            break;
        }
        if !picked.iter().any(|p| p.slug == meta.slug) {
            picked.push(meta);
        }
    }
    picked
}
