//! # Blog Catalog
//!
//! Content catalog and search API for a markdown blog.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (articles, series, tools)
//! - **content**: Filesystem reading, frontmatter parsing, slug assignment
//! - **catalog**: Pure query layer (sort, paginate, search, group, feature)
//! - **tools**: `tools.yaml` loading and validation
//! - **flow**: Forward-only phase state machine for the writing assistant
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod catalog;
pub mod config;
pub mod content;
pub mod flow;
pub mod models;
pub mod tools;

pub use models::*;
