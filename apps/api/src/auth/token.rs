use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::models::User;
use crate::state::AppState;

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively; blank tokens are ignored.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolves the caller, if a valid bearer token was sent.
pub async fn optional_user(state: &AppState, headers: &HeaderMap) -> Option<User> {
    let token = bearer_token(headers)?;
    state.users.resolve_token(token).await
}
