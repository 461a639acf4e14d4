use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::credentials::CredentialStore;
use super::session::{session_token, SessionTable, LOGIN_ROUTE};
use crate::articles::handlers::HOME_ROUTE;
use crate::error::ForumError;
use crate::form::FormValues;
use crate::pages::StaticPages;

pub const REGISTER_OK: &str = "Registration succeeded!";
pub const REGISTER_FAILED: &str = "Registration failed!";
pub const LOGIN_FAILED: &str = "Something went wrong!";

/// Fields posted by the login and registration forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsForm {
    pub name: String,
    pub pwd: String,
}

pub async fn handle_to_login(
    Extension(sessions): Extension<Arc<SessionTable>>,
    Extension(pages): Extension<Arc<StaticPages>>,
    headers: HeaderMap,
) -> Response {
    if sessions.is_logged_in(&headers) {
        return Redirect::to(HOME_ROUTE).into_response();
    }
    pages.login().into_response()
}

pub async fn handle_login(
    Extension(sessions): Extension<Arc<SessionTable>>,
    Extension(credentials): Extension<Arc<CredentialStore>>,
    Extension(pages): Extension<Arc<StaticPages>>,
    FormValues(form): FormValues<CredentialsForm>,
) -> Response {
    if form.name.is_empty() || form.pwd.is_empty() {
        return pages.login().into_response();
    }

    match credentials.verify(&form.name, &form.pwd).await {
        Ok(true) => {
            let token = sessions.create(&form.name);
            tracing::info!("User '{}' logged in", form.name);
            (
                [(SET_COOKIE, sessions.cookie_for(&token))],
                Redirect::to(HOME_ROUTE),
            )
                .into_response()
        }
        Ok(false) => {
            tracing::info!("Rejected login for '{}'", form.name);
            pages.login().into_response()
        }
        Err(e) => {
            tracing::error!(
                "Failed to read credentials from {}: {}",
                credentials.path().display(),
                e
            );
            LOGIN_FAILED.into_response()
        }
    }
}

pub async fn handle_to_register(Extension(pages): Extension<Arc<StaticPages>>) -> Response {
    pages.register().into_response()
}

pub async fn handle_register(
    Extension(credentials): Extension<Arc<CredentialStore>>,
    Extension(pages): Extension<Arc<StaticPages>>,
    FormValues(form): FormValues<CredentialsForm>,
) -> Response {
    if form.name.is_empty() && form.pwd.is_empty() {
        return pages.register().into_response();
    }

    match credentials.register(&form.name, &form.pwd).await {
        Ok(()) => {
            tracing::info!("Registered user '{}'", form.name);
            REGISTER_OK.into_response()
        }
        Err(ForumError::InvalidInput(reason)) => {
            tracing::warn!("Refused registration for '{}': {}", form.name, reason);
            REGISTER_FAILED.into_response()
        }
        Err(e) => {
            tracing::error!(
                "Failed to append to {}: {}",
                credentials.path().display(),
                e
            );
            REGISTER_FAILED.into_response()
        }
    }
}

pub async fn handle_logout(
    Extension(sessions): Extension<Arc<SessionTable>>,
    headers: HeaderMap,
) -> Response {
    if let Some(token) = session_token(&headers) {
        if let Some(name) = sessions.remove(&token) {
            tracing::info!("User '{}' logged out", name);
        }
    }

    (
        [(SET_COOKIE, sessions.expired_cookie())],
        Redirect::to(LOGIN_ROUTE),
    )
        .into_response()
}
