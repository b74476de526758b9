/*
 * Responsibility
 * - The rejections the token gate can produce
 * - IntoResponse (HTTP 401 / `{"success": false, "message": ...}` body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("No token provided")]
    MissingToken,
    // Expired, malformed, bad signature, unsupported alg: all end up here.
    #[error("Invalid token")]
    InvalidToken,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::MissingToken => "No token provided",
            AppError::InvalidToken => "Invalid token",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}
