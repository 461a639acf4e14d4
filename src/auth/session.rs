use std::sync::Arc;

use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::{header::COOKIE, request::Parts, HeaderMap},
    response::Redirect,
};
use dashmap::{mapref::entry::Entry, DashMap};
use rand::{rngs::OsRng, Rng};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";
/// Where anonymous requests to protected routes are sent.
pub const LOGIN_ROUTE: &str = "/toLogin";

const TOKEN_LEN: usize = 16;

/// Session table: opaque token to user name.
///
/// Tokens are never reused while live, so a token resolves to at most one
/// user. Expiry is left to the browser via the cookie `Max-Age`.
pub struct SessionTable {
    sessions: DashMap<String, String>,
    max_age: u64,
}

impl SessionTable {
    pub fn new(max_age: u64) -> Self {
        Self {
            sessions: DashMap::new(),
            max_age,
        }
    }

    /// Opens a session for `name` and returns its fresh token.
    pub fn create(&self, name: &str) -> String {
        loop {
            let token = generate_token();
            if let Entry::Vacant(entry) = self.sessions.entry(token.clone()) {
                entry.insert(name.to_string());
                tracing::debug!("Session table holds {} sessions", self.sessions.len());
                return token;
            }
        }
    }

    /// Resolves a token to its user. Empty names count as no session.
    pub fn lookup(&self, token: &str) -> Option<String> {
        self.sessions
            .get(token)
            .map(|name| name.value().clone())
            .filter(|name| !name.is_empty())
    }

    pub fn remove(&self, token: &str) -> Option<String> {
        let removed = self.sessions.remove(token).map(|(_, name)| name);
        tracing::debug!("Session table holds {} sessions", self.sessions.len());
        removed
    }

    /// True iff the request carries a token cookie bound to a user.
    pub fn is_logged_in(&self, headers: &HeaderMap) -> bool {
        session_token(headers)
            .and_then(|token| self.lookup(&token))
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// `Set-Cookie` value binding `token` to the browser.
    pub fn cookie_for(&self, token: &str) -> String {
        format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly",
            SESSION_COOKIE, token, self.max_age
        )
    }

    /// `Set-Cookie` value that makes the browser drop the session cookie.
    pub fn expired_cookie(&self) -> String {
        format!("{}=; Max-Age=0; Path=/; HttpOnly", SESSION_COOKIE)
    }
}

/// 16 uppercase ASCII letters drawn from the OS random source.
pub fn generate_token() -> String {
    let mut rng = OsRng;
    (0..TOKEN_LEN)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect()
}

/// Extracts the value of the `token` cookie, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
}

/// The logged-in user behind a request.
///
/// Extracting it is the login check: a request without a live session is
/// rejected with a redirect to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(sessions) = Extension::<Arc<SessionTable>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::error!("Session table missing from request: {}", e);
                Redirect::to(LOGIN_ROUTE)
            })?;

        let token = session_token(&parts.headers).ok_or_else(|| Redirect::to(LOGIN_ROUTE))?;
        let name = sessions
            .lookup(&token)
            .ok_or_else(|| Redirect::to(LOGIN_ROUTE))?;

        Ok(CurrentUser { name })
    }
}
