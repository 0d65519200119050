//! Cancellation workflow of a single server.
//!
//! `CancellationService` loads the record through a [`ServerStore`], lets the pure
//! rules in [`policy`] decide, writes the resulting state back with a guarded update
//! and hands a [`CancellationView`] to the controller for response shaping.

pub mod policy;
pub mod window;

use chrono::{DateTime, Utc};

use crate::server::{
    data::server::ServerStore,
    error::{cancellation::CancellationError, server::ServerError, AppError},
    model::{
        cancellation::{CancellationView, ScheduleCancellationParam, ServerCancellation},
        server::ServerLookupParam,
    },
};

pub struct CancellationService<S> {
    store: S,
}

impl<S: ServerStore> CancellationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load(&self, lookup: ServerLookupParam) -> Result<ServerCancellation, AppError> {
        self.store
            .find_cancellation(lookup)
            .await?
            .ok_or_else(|| ServerError::NotFound(lookup.server_number).into())
    }

    /// Describes the cancellation status of a server
    ///
    /// # Arguments
    /// - `lookup`: Owner and server number
    /// - `now`: Request time used for the earliest legal date
    ///
    /// # Returns
    /// - `Ok(CancellationView)`: Current status
    /// - `Err(AppError::ServerErr(NotFound))`: No such server for this owner
    pub async fn describe(
        &self,
        lookup: ServerLookupParam,
        now: DateTime<Utc>,
    ) -> Result<CancellationView, AppError> {
        let server = self.load(lookup).await?;

        Ok(policy::describe(server, now))
    }

    /// Schedules the cancellation of a server
    ///
    /// The state is written only if the server is still not cancelled at write time;
    /// losing that race is reported like any other already-cancelled server.
    ///
    /// # Arguments
    /// - `lookup`: Owner and server number
    /// - `param`: Requested date, reason and reservation flag
    /// - `now`: Request time
    ///
    /// # Returns
    /// - `Ok(CancellationView)`: The status after scheduling
    /// - `Err(AppError::ServerErr(NotFound))`: No such server for this owner
    /// - `Err(AppError::CancellationErr(_))`: The request was rejected, nothing was written
    /// - `Err(AppError::DbErr(_))`: Store failure, surfaced without retry
    pub async fn schedule(
        &self,
        lookup: ServerLookupParam,
        param: ScheduleCancellationParam,
        now: DateTime<Utc>,
    ) -> Result<CancellationView, AppError> {
        let mut server = self.load(lookup).await?;

        let state = policy::schedule(&server, &param, now).inspect_err(|err| {
            tracing::debug!(
                server_number = lookup.server_number,
                "Rejected cancellation request: {}",
                err
            )
        })?;

        if !self.store.save_cancellation(lookup, false, &state).await? {
            tracing::debug!(
                server_number = lookup.server_number,
                "Server was cancelled concurrently"
            );
            return Err(CancellationError::AlreadyCancelled.into());
        }

        tracing::info!(
            server_number = lookup.server_number,
            reserved = state.reserved,
            "Scheduled cancellation for {}",
            state
                .cancellation_date
                .map(|date| date.to_string())
                .unwrap_or_default()
        );

        server.state = state;

        Ok(policy::describe(server, now))
    }

    /// Revokes a scheduled cancellation
    ///
    /// # Returns
    /// - `Ok(())`: The server is active again and any reservation was released
    /// - `Err(AppError::ServerErr(NotFound))`: No such server for this owner
    /// - `Err(AppError::CancellationErr(NotCancelled))`: Nothing to revoke
    /// - `Err(AppError::DbErr(_))`: Store failure, surfaced without retry
    pub async fn revoke(&self, lookup: ServerLookupParam) -> Result<(), AppError> {
        let server = self.load(lookup).await?;

        let state = policy::revoke(&server).inspect_err(|err| {
            tracing::debug!(
                server_number = lookup.server_number,
                "Rejected revocation request: {}",
                err
            )
        })?;

        if !self.store.save_cancellation(lookup, true, &state).await? {
            tracing::debug!(
                server_number = lookup.server_number,
                "Cancellation was revoked concurrently"
            );
            return Err(CancellationError::NotCancelled.into());
        }

        tracing::info!(
            server_number = lookup.server_number,
            "Revoked cancellation"
        );

        Ok(())
    }
}
