//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps the domain-specific errors and implements `IntoResponse`, so every endpoint
//! renders the same `{"error": {"status", "code", "message"}}` envelope.

pub mod auth;
pub mod cancellation;
pub mod config;
pub mod internal;
pub mod server;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, cancellation::CancellationError, config::ConfigError,
        internal::InternalError, server::ServerError, user::UserError,
    },
};

/// Code reported for every failure that is not the caller's fault.
pub const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `CancellationError`, `ServerError`, `UserError`) carry
/// their own status code and stable machine-readable code. Infrastructure errors
/// (database, I/O, configuration, internal inconsistencies) always surface as
/// `500 INTERNAL_ERROR` with a generic message, while the details are logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, rendered as 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected cancellation or revocation request.
    #[error(transparent)]
    CancellationErr(#[from] CancellationError),

    /// Server lookup or rename error.
    #[error(transparent)]
    ServerErr(#[from] ServerError),

    /// User registration error.
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Stored data that the application cannot interpret.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// This is the store error of the cancellation workflow. It is surfaced as-is and
    /// never retried by the service layer.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed request body.
    #[error("{0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,
}

impl AppError {
    /// HTTP status code the error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthErr(err) => err.status(),
            Self::CancellationErr(err) => err.status(),
            Self::ServerErr(err) => err.status(),
            Self::UserErr(err) => err.status(),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::ConfigErr(_) | Self::InternalErr(_) | Self::DbErr(_) | Self::IoErr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthErr(err) => err.code(),
            Self::CancellationErr(err) => err.code(),
            Self::ServerErr(err) => err.code(),
            Self::UserErr(err) => err.code(),
            Self::BadRequest(_) => "INVALID_INPUT",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::ConfigErr(_) | Self::InternalErr(_) | Self::DbErr(_) | Self::IoErr(_) => {
                INTERNAL_ERROR_CODE
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors are rendered with their own status, code and message. Everything
/// else is delegated to [`InternalServerError`], which logs the details and returns a
/// generic message to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::CancellationErr(err) => err.into_response(),
            Self::ServerErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::BadRequest(_) | Self::RouteNotFound => {
                error_response(self.status(), self.code(), self.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error envelope for the given status, code and message.
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(status.as_u16(), code, message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client. Used as the fallback for errors without a client-facing mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_CODE,
            "Internal server error",
        )
    }
}
