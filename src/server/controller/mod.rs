//! HTTP request handlers.
//!
//! Handlers authenticate the caller, convert path and body DTOs into parameters, call
//! the service layer and convert the resulting domain models back into DTOs.

pub mod cancellation;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;

use axum::{
    extract::rejection::FormRejection,
    http::{header::CONTENT_TYPE, HeaderMap},
    Form,
};

use crate::server::error::AppError;

/// Unwraps an optional form body.
///
/// A request without `Content-Type` carries no form at all and yields the default
/// value. Any other rejection is reported as `INVALID_INPUT`.
pub(crate) fn form_or_default<T: Default>(
    headers: &HeaderMap,
    form: Result<Form<T>, FormRejection>,
) -> Result<T, AppError> {
    match form {
        Ok(Form(value)) => Ok(value),
        Err(FormRejection::InvalidFormContentType(_)) if !headers.contains_key(CONTENT_TYPE) => {
            Ok(T::default())
        }
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
