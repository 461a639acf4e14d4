//! Forum error classification.
//!
//! Handlers turn most failures into the same plain responses the forum has
//! always given; this type exists so callers and tests can tell a missing
//! article apart from an unreadable credential file or a rejected field.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::views::NotFoundView;

#[derive(Error, Debug)]
pub enum ForumError {
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        if let ForumError::NotFound(title) = &self {
            let view = NotFoundView {
                title: title.clone(),
            };
            if let Ok(html) = view.render() {
                return (StatusCode::NOT_FOUND, Html(html)).into_response();
            }
        }

        let status = match self {
            ForumError::NotFound { .. } => StatusCode::NOT_FOUND,
            ForumError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ForumError::Io { .. } | ForumError::Render { .. } => {
                tracing::error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
