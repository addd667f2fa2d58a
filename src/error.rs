/*
 * Responsibility
 * - アプリ共通の HttpError 定義 (種類ごとに HTTP status が固定)
 * - IntoResponse 実装 (uncaught-error boundary と同じ JSON body)
 * - RepoError など下位層のエラーを ServerError に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

/// The only message a client ever sees for an uncaught error.
pub const GENERIC_ERROR_MESSAGE: &str = "server error, this will be resolved shortly!";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Server-side detail of an uncaught error.
///
/// Stored in the response extensions so the error boundary can log it together with
/// the request line. Never serialized to the client.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: Option<StatusCode>,
    pub kind: &'static str,
    pub message: String,
}

impl ErrorReport {
    pub fn status_or_default(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    ResourceNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Expired(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    ServerError(String),
    #[error("{0}")]
    FileValidationError(String),
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ResourceNotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn expired(message: impl Into<String>) -> Self {
        Self::Expired(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::ServerError(message.into())
    }

    pub fn file_validation(message: impl Into<String>) -> Self {
        Self::FileValidationError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Expired(_) => StatusCode::GONE,
            HttpError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::FileValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HttpError::BadRequest(_) => "BadRequest",
            HttpError::Unauthorized(_) => "Unauthorized",
            HttpError::Forbidden(_) => "Forbidden",
            HttpError::ResourceNotFound(_) => "ResourceNotFound",
            HttpError::Conflict(_) => "Conflict",
            HttpError::Expired(_) => "Expired",
            HttpError::InvalidInput(_) => "InvalidInput",
            HttpError::ServerError(_) => "ServerError",
            HttpError::FileValidationError(_) => "FileValidationError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(m)
            | HttpError::Unauthorized(m)
            | HttpError::Forbidden(m)
            | HttpError::ResourceNotFound(m)
            | HttpError::Conflict(m)
            | HttpError::Expired(m)
            | HttpError::InvalidInput(m)
            | HttpError::ServerError(m)
            | HttpError::FileValidationError(m) => m.as_str(),
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            status: Some(self.status_code()),
            kind: self.kind(),
            message: self.message().to_string(),
        }
    }
}

/// Build the client-facing response for an uncaught error.
///
/// A missing status falls back to 500. The original message only travels in the
/// `ErrorReport` extension.
pub fn uncaught_error_response(report: ErrorReport) -> Response {
    let status = report.status_or_default();
    let body = ErrorResponse {
        success: false,
        message: GENERIC_ERROR_MESSAGE.to_string(),
    };

    let mut response = (status, Json(body)).into_response();
    response.extensions_mut().insert(report);
    response
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        uncaught_error_response(self.report())
    }
}

impl From<RepoError> for HttpError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(err) => HttpError::server_error(format!("database error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_bound_to_its_status() {
        let table = [
            (HttpError::bad_request("m"), 400),
            (HttpError::unauthorized("m"), 401),
            (HttpError::forbidden("m"), 403),
            (HttpError::not_found("m"), 404),
            (HttpError::conflict("m"), 409),
            (HttpError::expired("m"), 410),
            (HttpError::invalid_input("m"), 422),
            (HttpError::server_error("m"), 500),
            (HttpError::file_validation("m"), 400),
        ];

        for (err, status) in table {
            assert_eq!(err.status_code().as_u16(), status, "{}", err.kind());
            assert_eq!(err.message(), "m");
        }
    }

    #[test]
    fn response_uses_kind_status_and_keeps_message_server_side() {
        let response = HttpError::conflict("duplicate email").into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.kind, "Conflict");
        assert_eq!(report.message, "duplicate email");
    }

    #[test]
    fn missing_status_defaults_to_internal_server_error() {
        let response = uncaught_error_response(ErrorReport {
            status: None,
            kind: "panic",
            message: "boom".into(),
        });

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(HttpError::expired("link expired").to_string(), "link expired");
    }
}
