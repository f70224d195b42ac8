//! Core data models for the blog catalog.

mod article;
mod ids;
mod series;
mod tool;

pub use article::*;
pub use ids::*;
pub use series::*;
pub use tool::*;
