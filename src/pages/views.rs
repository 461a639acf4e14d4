//! Askama view models for the pages that carry per-request context.

use askama::Template;
use axum::response::Html;

use crate::articles::types::{Article, TitleInfo};
use crate::error::ForumError;

/// Home page: the full title listing.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeView {
    pub name: String,
    pub titles: Vec<TitleInfo>,
    pub is_nothing: bool,
}

impl HomeView {
    pub fn new(name: String, titles: Vec<TitleInfo>) -> Self {
        let is_nothing = titles.is_empty();
        Self {
            name,
            titles,
            is_nothing,
        }
    }
}

/// One article with its reply thread.
#[derive(Template)]
#[template(path = "details.html")]
pub struct DetailsView {
    pub name: String,
    pub article: Article,
    pub is_reply: bool,
}

impl DetailsView {
    pub fn new(name: String, article: Article) -> Self {
        let is_reply = article.has_replies();
        Self {
            name,
            article,
            is_reply,
        }
    }
}

/// Reply composition form.
#[derive(Template)]
#[template(path = "respond.html")]
pub struct RespondView {
    pub name: String,
    pub to_name: String,
    pub title: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundView {
    pub title: String,
}

/// Renders a view into an HTML response.
pub fn render<T: Template>(view: T) -> Result<Html<String>, ForumError> {
    view.render().map(Html).map_err(|e| {
        tracing::error!("Template rendering failed: {}", e);
        ForumError::Render(e)
    })
}
