use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization` header.
    #[error("Authorization header required")]
    HeaderMissing,

    /// The header is not of the form `Basic <credentials>`.
    #[error("Invalid authorization format")]
    InvalidFormat,

    /// The credentials are not valid Base64.
    #[error("Invalid Base64 encoding")]
    InvalidBase64,

    /// The decoded credentials contain no `:` separator.
    #[error("Invalid username or password format")]
    InvalidCredentialFormat,

    /// Unknown username or wrong password.
    ///
    /// # Fields
    /// - Username that failed to authenticate, logged but never returned to the client
    #[error("Invalid username or password")]
    InvalidCredentials(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::HeaderMissing => "AUTH_HEADER_MISSING",
            Self::InvalidFormat => "INVALID_AUTH_FORMAT",
            Self::InvalidBase64 => "INVALID_BASE64_ENCODING",
            Self::InvalidCredentialFormat => "INVALID_USERNAME_PASSWORD_FORMAT",
            Self::InvalidCredentials(_) => "INVALID_USERNAME_PASSWORD",
        }
    }
}

/// Converts authentication errors into 401 responses.
///
/// Failed logins are logged at debug level with the attempted username; the
/// client only sees the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::InvalidCredentials(ref username) = self {
            tracing::debug!("Authentication failed for user '{}'", username);
        }

        error_response(self.status(), self.code(), self.to_string())
    }
}
