use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// No server with this number exists in the caller's scope.
    #[error("Server with id {0} not found")]
    NotFound(i32),

    /// The caller owns no servers at all.
    #[error("No servers found")]
    NoServers,

    /// The path segment is not a positive integer.
    #[error("Invalid server number '{0}'")]
    InvalidServerNumber(String),

    /// Rename was requested without a new name.
    #[error("Server name is required")]
    MissingServerName,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::NoServers => StatusCode::NOT_FOUND,
            Self::InvalidServerNumber(_) | Self::MissingServerName => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) | Self::NoServers => "SERVER_NOT_FOUND",
            Self::InvalidServerNumber(_) => "INVALID_SERVER_NUMBER",
            Self::MissingServerName => "MISSING_SERVER_NAME",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.code(), self.to_string())
    }
}
