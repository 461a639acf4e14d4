use std::sync::Arc;

use axum::{
    extract::Extension,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::store::ArticleStore;
use super::types::{Article, Reply};
use crate::auth::session::CurrentUser;
use crate::error::ForumError;
use crate::form::FormValues;
use crate::pages::views::{render, DetailsView, HomeView, RespondView};
use crate::pages::StaticPages;

pub const HOME_ROUTE: &str = "/home";
pub const DETAILS_ROUTE: &str = "/details";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UploadForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetailsParams {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RespondParams {
    #[serde(rename = "toName")]
    pub to_name: String,
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplyForm {
    #[serde(rename = "toName")]
    pub to_name: String,
    pub title: String,
    pub content: String,
}

pub async fn handle_home(
    user: CurrentUser,
    Extension(store): Extension<Arc<ArticleStore>>,
) -> Result<Html<String>, ForumError> {
    let titles = store.titles().await;
    render(HomeView::new(user.name, titles))
}

pub async fn handle_details(
    user: CurrentUser,
    Extension(store): Extension<Arc<ArticleStore>>,
    FormValues(params): FormValues<DetailsParams>,
) -> Result<Html<String>, ForumError> {
    let article = store
        .get(&params.title)
        .ok_or_else(|| ForumError::NotFound(params.title.clone()))?;

    render(DetailsView::new(user.name, article))
}

pub async fn handle_to_upload(
    _user: CurrentUser,
    Extension(pages): Extension<Arc<StaticPages>>,
) -> Response {
    pages.upload().into_response()
}

pub async fn handle_upload(
    user: CurrentUser,
    Extension(store): Extension<Arc<ArticleStore>>,
    FormValues(form): FormValues<UploadForm>,
) -> Redirect {
    tracing::info!("New article '{}' by '{}'", form.title, user.name);
    store
        .publish(Article::new(form.title, user.name, form.content))
        .await;

    Redirect::to(HOME_ROUTE)
}

pub async fn handle_respond(
    user: CurrentUser,
    FormValues(params): FormValues<RespondParams>,
) -> Result<Html<String>, ForumError> {
    render(RespondView {
        name: user.name,
        to_name: params.to_name,
        title: params.title,
    })
}

pub async fn handle_reply(
    user: CurrentUser,
    Extension(store): Extension<Arc<ArticleStore>>,
    FormValues(form): FormValues<ReplyForm>,
) -> Result<Redirect, ForumError> {
    let reply = Reply::new(user.name, form.to_name, form.content);
    let count = store.append_reply(&form.title, reply)?;
    tracing::debug!("Article '{}' now has {} replies", form.title, count);

    Ok(Redirect::to(&details_location(&form.title)))
}

/// `/details?title=...` with the title form-encoded.
pub fn details_location(title: &str) -> String {
    let query = serde_urlencoded::to_string(&[("title", title)]).unwrap_or_default();
    format!("{}?{}", DETAILS_ROUTE, query)
}
