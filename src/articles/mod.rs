//! Articles Module
//!
//! Posting, listing and replying. Articles are keyed by title; the home page
//! is driven by a separate listing that grows with every upload.
//!
//! ## Submodules
//! - **`types`**: `Article`, `Reply`, `TitleInfo`.
//! - **`store`**: the synchronized in-memory `ArticleStore`.
//! - **`handlers`**: HTTP handlers for the article routes.

pub mod handlers;
pub mod store;
pub mod types;
