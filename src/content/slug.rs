//! URL-safe slug derivation from article titles.

use std::collections::{HashMap, HashSet};

/// Map a title to a URL-safe slug.
///
/// Lowercases, turns whitespace runs into single hyphens, drops anything
/// that is not alphanumeric (Unicode letters and digits are kept, so
/// Hangul/CJK titles survive) and collapses hyphen runs.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress leading hyphens

    for c in title.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        } else if c.is_alphanumeric() {
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
            last_was_hyphen = false;
        }
        // everything else is dropped
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Per-invocation slug disambiguator.
///
/// Uniqueness is only guaranteed among slugs assigned by the same
/// assigner; a fresh assigner is created for every listing pass, so the
/// suffix a duplicate title receives can change between passes if the
/// insertion order changes.
#[derive(Debug, Default)]
pub struct SlugAssigner {
    emitted: HashSet<String>,
    counters: HashMap<String, u32>,
}

impl SlugAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a slug for `title`, suffixing `-2`, `-3`, … on collision.
    ///
    /// Every emitted slug is recorded, so a suffixed slug can never
    /// collide with another title's natural slug (or a prior suffix).
    pub fn assign(&mut self, title: &str) -> String {
        let base = slugify(title);
        if self.emitted.insert(base.clone()) {
            return base;
        }
        let counter = self.counters.entry(base.clone()).or_insert(1);
        loop {
            *counter += 1;
            let candidate = format!("{}-{}", base, counter);
            if self.emitted.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("  Hello   --  World  "), "hello-world");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("What's new in Rust 1.80?"), "whats-new-in-rust-180");
    }

    #[test]
    fn test_slugify_keeps_hangul() {
        assert_eq!(slugify("안녕 세계"), "안녕-세계");
    }

    #[test]
    fn test_slugify_empty_after_stripping() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_assigner_first_keeps_base() {
        let mut assigner = SlugAssigner::new();
        assert_eq!(assigner.assign("Hello World"), "hello-world");
    }

    #[test]
    fn test_assigner_duplicates_are_distinct() {
        let mut assigner = SlugAssigner::new();
        let a = assigner.assign("Same Title");
        let b = assigner.assign("Same Title");
        let c = assigner.assign("Same Title");
        assert_eq!(a, "same-title");
        assert_eq!(b, "same-title-2");
        assert_eq!(c, "same-title-3");
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_assigner_suffix_never_collides_with_natural_slug() {
        let mut assigner = SlugAssigner::new();
        let a = assigner.assign("Post");
        let b = assigner.assign("Post");
        let c = assigner.assign("Post 2");
        assert_eq!(a, "post");
        assert_eq!(b, "post-2");
        // "Post 2" slugifies to the already-taken "post-2"
        assert_eq!(c, "post-2-2");
    }

    #[test]
    fn test_assigner_natural_slug_taken_before_duplicate() {
        let mut assigner = SlugAssigner::new();
        assigner.assign("Post 2");
        let a = assigner.assign("Post");
        let b = assigner.assign("Post");
        // the "-2" suffix is occupied, so the duplicate skips to "-3"
        assert_eq!(a, "post");
        assert_eq!(b, "post-3");
    }

    #[test]
    fn test_assigner_resets_per_instance() {
        let mut first = SlugAssigner::new();
        first.assign("Same Title");
        // A fresh assigner starts over; no cross-call state
        let mut second = SlugAssigner::new();
        assert_eq!(second.assign("Same Title"), "same-title");
    }

    #[test]
    fn test_assigner_distinct_titles_untouched() {
        let mut assigner = SlugAssigner::new();
        assert_eq!(assigner.assign("Alpha"), "alpha");
        assert_eq!(assigner.assign("Beta"), "beta");
    }
}
