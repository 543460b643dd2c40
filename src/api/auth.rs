//! Bearer token extraction.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use secrecy::SecretString;

use crate::error::ApiError;

/// Pull the access token out of `Authorization: Bearer <token>`.
///
/// The token must be a single non-empty segment; `"Bearer a b"` is
/// rejected rather than guessing which part is the token.
pub fn bearer_token(headers: &HeaderMap) -> Result<SecretString, ApiError> {
    let value = headers.get(AUTHORIZATION).ok_or(ApiError::MissingAuth)?;
    let value = value.to_str().map_err(|_| ApiError::MalformedAuth)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(ApiError::MalformedAuth)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer")
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return Err(ApiError::MalformedAuth);
    }
    Ok(SecretString::from(token.to_string()))
}
