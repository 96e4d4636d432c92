//! Bearer-token check against the configured backend secret

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::{Result, SummaryError};

const BEARER_PREFIX: &str = "Bearer ";

/// Allow the request only if `header` is `Bearer <secret>` exactly.
pub fn authorize(header: Option<&str>, secret: &str) -> Result<()> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(SummaryError::Unauthorized)?;

    if secret.is_empty() || !constant_time_eq(token.as_bytes(), secret.as_bytes()) {
        return Err(SummaryError::Unauthorized);
    }

    Ok(())
}

/// Run [`authorize`] against the request's `Authorization` header.
pub fn authorize_headers(headers: &HeaderMap, secret: &str) -> Result<()> {
    // Non-visible-ASCII header values are treated as missing.
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    authorize(header, secret)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
