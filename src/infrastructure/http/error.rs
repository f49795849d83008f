//! HTTP Error Handling
//!
//! 领域错误到 HTTP 状态码的转换：不存在 → 404，已存在 → 409

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{ChapterError, CharacterError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义（与 HTTP 状态码一致）
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const CONFLICT: i32 = 409;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %msg, "Resource not found");
                ErrorResponse::new(errno::NOT_FOUND, msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                ErrorResponse::new(errno::BAD_REQUEST, msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(errno = errno::CONFLICT, error = %msg, "Resource conflict");
                ErrorResponse::new(errno::CONFLICT, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(
                    errno = errno::INTERNAL_ERROR,
                    error = %msg,
                    "Internal server error"
                );
                ErrorResponse::new(errno::INTERNAL_ERROR, msg)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        let message = e.to_string();
        match e {
            CharacterError::NotFound(_) => ApiError::NotFound(message),
            CharacterError::AlreadyExists(_) => ApiError::Conflict(message),
            CharacterError::StorageError(_) => ApiError::Internal(message),
        }
    }
}

impl From<ChapterError> for ApiError {
    fn from(e: ChapterError) -> Self {
        let message = e.to_string();
        match e {
            ChapterError::NotFound(_) => ApiError::NotFound(message),
            ChapterError::AlreadyExists(_) => ApiError::Conflict(message),
            ChapterError::StorageError(_) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
