//! Decision rules of the cancellation workflow.
//!
//! These functions perform no I/O. Each one takes the current record and the request
//! time and either rejects the action or returns the complete state to persist, so a
//! rejected request never leaves a partially updated record behind.

use chrono::{DateTime, Utc};

use crate::server::{
    error::cancellation::CancellationError,
    model::cancellation::{
        CancellationReason, CancellationState, CancellationView, ScheduleCancellationParam,
        ServerCancellation,
    },
    service::cancellation::window,
};

/// Decides a scheduling request.
///
/// Checks run in a fixed order: current state, reason, reservation eligibility, date
/// format and finally the notice window.
///
/// # Returns
/// - `Ok(CancellationState)` - The cancelled state to persist
/// - `Err(CancellationError)` - The first rule the request violates
pub fn schedule(
    server: &ServerCancellation,
    param: &ScheduleCancellationParam,
    now: DateTime<Utc>,
) -> Result<CancellationState, CancellationError> {
    if server.state.cancelled {
        return Err(CancellationError::AlreadyCancelled);
    }

    let reserve_location = param.reserve_location()?;

    let cancellation_reason = match param.cancellation_reason.as_deref() {
        None | Some("") => None,
        Some(value) => Some(
            CancellationReason::parse(value)
                .ok_or_else(|| CancellationError::InvalidReason(value.to_string()))?,
        ),
    };

    if reserve_location && !server.reservation_possible() {
        return Err(CancellationError::ReservationNotAllowed);
    }

    let cancellation_date = window::resolve_date(param.cancellation_date.as_deref(), now)?;

    Ok(CancellationState {
        cancelled: true,
        cancellation_date: Some(cancellation_date),
        cancellation_reason,
        reserved: reserve_location,
    })
}

/// Decides a revocation request.
///
/// Revoking always releases a reservation along with the date and reason.
///
/// # Returns
/// - `Ok(CancellationState)` - The active state to persist
/// - `Err(CancellationError::NotCancelled)` - There is nothing to revoke
pub fn revoke(server: &ServerCancellation) -> Result<CancellationState, CancellationError> {
    if !server.state.cancelled {
        return Err(CancellationError::NotCancelled);
    }

    Ok(CancellationState::default())
}

/// Builds the read-only cancellation view for the request time.
pub fn describe(server: ServerCancellation, now: DateTime<Utc>) -> CancellationView {
    CancellationView {
        server,
        earliest_cancellation_date: window::earliest_legal_date(now),
    }
}
