//! Form value extraction.
//!
//! Every forum route reads its fields the same way whatever the method: the
//! query string and, when the body is urlencoded, the body. A key present in
//! both takes the body's value; a repeated key keeps its first value. Bodies of
//! any other content type are ignored rather than rejected.

use std::collections::HashSet;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::ForumError;

const URLENCODED: &str = "application/x-www-form-urlencoded";

/// Form fields merged from the query string and an urlencoded body.
#[derive(Debug, Clone, Default)]
pub struct FormValues<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormValues<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ForumError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().unwrap_or_default().to_string();
        let is_urlencoded = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(URLENCODED));

        let body = if is_urlencoded {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| ForumError::InvalidInput(e.to_string()))?;
            Some(bytes)
        } else {
            None
        };

        let pairs = merge_form_values(&query, body.as_deref())?;
        let encoded = serde_urlencoded::to_string(&pairs)
            .map_err(|e| ForumError::InvalidInput(e.to_string()))?;
        let value = serde_urlencoded::from_str(&encoded)
            .map_err(|e| ForumError::InvalidInput(e.to_string()))?;

        Ok(FormValues(value))
    }
}

/// Body pairs first, then query pairs, first occurrence of each key kept.
pub fn merge_form_values(
    query: &str,
    body: Option<&[u8]>,
) -> Result<Vec<(String, String)>, ForumError> {
    let mut pairs: Vec<(String, String)> = match body {
        Some(body) => serde_urlencoded::from_bytes(body)
            .map_err(|e| ForumError::InvalidInput(e.to_string()))?,
        None => Vec::new(),
    };
    let query_pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| ForumError::InvalidInput(e.to_string()))?;
    pairs.extend(query_pairs);

    let mut seen = HashSet::new();
    pairs.retain(|(key, _)| seen.insert(key.clone()));
    Ok(pairs)
}
