//! HTTP-facing error type shared by every handler.
//!
//! Messages are returned verbatim as `text/plain` bodies; persistence errors
//! carry the underlying database message.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400).
    #[error("{0}")]
    Validation(String),
    /// The requested record does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// The store failed (500).
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    /// `Persistence` error reading `<context>: <cause>`.
    pub fn persistence(context: &str, cause: impl Display) -> Self {
        ApiError::Persistence(format!("{}: {}", context, cause))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        let err = ApiError::persistence("Error storing inspection", "disk I/O error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error storing inspection: disk I/O error");
    }
}
