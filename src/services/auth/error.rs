/*
 * Responsibility
 * - 認証パイプラインの失敗を 1 つの型に集約する
 * - 想定内の拒否は 401 {status_code: "401", message: "Invalid token"} に固定
 * - 想定外 (lookup backend 障害など) は ServerError として error boundary へ
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::error::HttpError;
use crate::repos::error::RepoError;
use crate::services::auth::access_jwt::AccessJwtError;

#[derive(Debug, Serialize)]
pub struct AuthRejectionBody {
    pub status_code: &'static str,
    pub message: &'static str,
}

impl AuthRejectionBody {
    pub const INVALID_TOKEN: Self = Self {
        status_code: "401",
        message: "Invalid token",
    };
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed authorization header")]
    MissingCredential,

    #[error("empty bearer token")]
    EmptyToken,

    #[error(transparent)]
    Token(#[from] AccessJwtError),

    #[error("token refers to an unknown user")]
    UnknownUser,

    #[error("user lookup failed")]
    Lookup(#[source] RepoError),
}

impl AuthError {
    /// Whether this is an expected authentication failure (answered with 401).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, AuthError::Lookup(_))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Lookup(err) => {
                // The error boundary logs the escalated ServerError with the request line.
                tracing::debug!(error = ?err, "authentication aborted by user lookup failure");
                HttpError::server_error("INTERNAL_SERVER_ERROR").into_response()
            }
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(AuthRejectionBody::INVALID_TOKEN),
            )
                .into_response(),
        }
    }
}
