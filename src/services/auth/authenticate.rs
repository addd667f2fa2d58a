//! Credential → identity resolution.
//!
//! The whole pipeline (header → token → verified claims → user record) runs as one
//! sequential async call and reports every failure through `AuthError`.

use axum::http::{HeaderMap, header};

use crate::repos::UserRow;
use crate::services::auth::{AuthError, AuthService};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer credential from the `Authorization` header.
///
/// The header must start with exactly `"Bearer "`; the credential is the second
/// space-separated segment and must not be empty.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    if !auth.starts_with(BEARER_PREFIX) {
        return Err(AuthError::MissingCredential);
    }

    match auth.split(' ').nth(1) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::EmptyToken),
    }
}

impl AuthService {
    /// Resolve the identity behind the request's bearer token.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<UserRow, AuthError> {
        let token = bearer_token(headers)?;

        let verified = self.verify(token)?;

        self.users()
            .find_by_id(verified.user_id)
            .await
            .map_err(AuthError::Lookup)?
            .ok_or(AuthError::UnknownUser)
    }
}
