use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Registration attempted with an empty username or password.
    #[error("Username and password are required")]
    MissingCredentials,

    /// Registration attempted with a username that already exists.
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
}

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::UsernameTaken(_) => StatusCode::CONFLICT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "INVALID_INPUT",
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.code(), self.to_string())
    }
}
