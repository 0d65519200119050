use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::server::error::error_response;

/// Rejections produced by the cancellation policy.
///
/// Every variant is detected before any field is written, so the caller may retry
/// with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancellationError {
    /// Scheduling was requested for a server that is already cancelled.
    #[error("The server is already cancelled")]
    AlreadyCancelled,

    /// Revocation was requested for a server that is not cancelled.
    #[error("The cancellation cannot be revoked")]
    NotCancelled,

    /// The reason is not part of the reason catalog.
    #[error("Invalid cancellation reason '{0}'")]
    InvalidReason(String),

    /// Location reservation was requested for a server type that does not support it.
    #[error("It is not possible to reserve the location. Remove parameter reserve_location or set value to 'false'")]
    ReservationNotAllowed,

    /// The requested date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid cancellation date '{0}', expected format yyyy-MM-dd")]
    InvalidDateFormat(String),

    /// The requested date is earlier than the minimum notice period allows.
    #[error("Cancellation date {requested} is too soon, the earliest possible date is {earliest}")]
    DateTooSoon {
        requested: NaiveDate,
        earliest: NaiveDate,
    },

    /// `reserve_location` is neither `"true"` nor `"false"`.
    #[error("Invalid value '{0}' for reserve_location, expected 'true' or 'false'")]
    InvalidReserveLocation(String),
}

impl CancellationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AlreadyCancelled | Self::NotCancelled | Self::ReservationNotAllowed => {
                StatusCode::CONFLICT
            }
            Self::InvalidReason(_)
            | Self::InvalidDateFormat(_)
            | Self::DateTooSoon { .. }
            | Self::InvalidReserveLocation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyCancelled | Self::NotCancelled => "CONFLICT",
            Self::InvalidReason(_) => "INVALID_CANCELLATION_REASON",
            Self::ReservationNotAllowed => "SERVER_CANCELLATION_RESERVE_LOCATION_FALSE_ONLY",
            Self::InvalidDateFormat(_) | Self::DateTooSoon { .. } => "INVALID_CANCELLATION_DATE",
            Self::InvalidReserveLocation(_) => "INVALID_INPUT",
        }
    }
}

impl IntoResponse for CancellationError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.code(), self.to_string())
    }
}
