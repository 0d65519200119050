//! Server data repository for database operations.
//!
//! This module provides the `ServerStore` trait consumed by the cancellation workflow and
//! `ServerRepository`, its SeaORM implementation, which also serves the plain listing,
//! detail and rename queries.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        cancellation::{CancellationState, ServerCancellation},
        server::{Server, ServerLookupParam},
    },
};

/// Storage collaborator of the cancellation workflow.
///
/// Implementations must make `save_cancellation` conditional on the stored `cancelled`
/// flag so that two requests racing on the same server number cannot both apply a
/// transition computed from the same prior state.
#[async_trait]
pub trait ServerStore: Send + Sync {
    /// Loads the cancellation-relevant fields of a server owned by `owner_id`.
    ///
    /// # Returns
    /// - `Ok(Some(ServerCancellation))` - The server exists in the caller's scope
    /// - `Ok(None)` - No such server for this owner
    /// - `Err(AppError)` - Store failure or unreadable stored data
    async fn find_cancellation(
        &self,
        lookup: ServerLookupParam,
    ) -> Result<Option<ServerCancellation>, AppError>;

    /// Writes the four cancellation fields if the stored `cancelled` flag still equals
    /// `expected_cancelled`.
    ///
    /// # Returns
    /// - `Ok(true)` - The new state was written
    /// - `Ok(false)` - The stored state changed since it was read; nothing was written
    /// - `Err(AppError)` - Store failure
    async fn save_cancellation(
        &self,
        lookup: ServerLookupParam,
        expected_cancelled: bool,
        state: &CancellationState,
    ) -> Result<bool, AppError>;
}

/// Repository providing database operations for dedicated servers.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        lookup: ServerLookupParam,
    ) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find()
            .filter(entity::server::Column::UserId.eq(lookup.owner_id))
            .filter(entity::server::Column::ServerNumber.eq(lookup.server_number))
            .one(self.db)
            .await
    }

    async fn load_ips(&self, server_id: i32) -> Result<Vec<entity::server_ip::Model>, DbErr> {
        entity::prelude::ServerIp::find()
            .filter(entity::server_ip::Column::ServerId.eq(server_id))
            .order_by_asc(entity::server_ip::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every server owned by a user, ordered by server number.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Servers with their address rows (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_by_owner(&self, owner_id: i32) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .filter(entity::server::Column::UserId.eq(owner_id))
            .order_by_asc(entity::server::Column::ServerNumber)
            .all(self.db)
            .await?;

        let mut servers = Vec::with_capacity(entities.len());
        for entity in entities {
            let ips = self.load_ips(entity.id).await?;
            servers.push(Server::from_entity(entity, ips));
        }

        Ok(servers)
    }

    /// Finds a server by number within the owner's scope.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - Server found
    /// - `Ok(None)` - Unknown number, or the server belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_number(&self, lookup: ServerLookupParam) -> Result<Option<Server>, DbErr> {
        let Some(entity) = self.find_model(lookup).await? else {
            return Ok(None);
        };

        let ips = self.load_ips(entity.id).await?;

        Ok(Some(Server::from_entity(entity, ips)))
    }

    /// Sets the display name of a server.
    ///
    /// Some backends count only changed rows, so a rename to the current name falls
    /// back to an existence check.
    ///
    /// # Returns
    /// - `Ok(true)` - The server was renamed
    /// - `Ok(false)` - No matching server in the owner's scope
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(
        &self,
        lookup: ServerLookupParam,
        server_name: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::update_many()
            .col_expr(
                entity::server::Column::ServerName,
                Expr::value(server_name.to_string()),
            )
            .filter(entity::server::Column::UserId.eq(lookup.owner_id))
            .filter(entity::server::Column::ServerNumber.eq(lookup.server_number))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(true);
        }

        Ok(self.find_model(lookup).await?.is_some())
    }
}

#[async_trait]
impl ServerStore for ServerRepository<'_> {
    async fn find_cancellation(
        &self,
        lookup: ServerLookupParam,
    ) -> Result<Option<ServerCancellation>, AppError> {
        self.find_model(lookup)
            .await?
            .map(ServerCancellation::from_entity)
            .transpose()
    }

    async fn save_cancellation(
        &self,
        lookup: ServerLookupParam,
        expected_cancelled: bool,
        state: &CancellationState,
    ) -> Result<bool, AppError> {
        let reason = state
            .cancellation_reason
            .map(|reason| reason.as_str().to_string());

        let result = entity::prelude::Server::update_many()
            .col_expr(entity::server::Column::Cancelled, Expr::value(state.cancelled))
            .col_expr(
                entity::server::Column::CancellationDate,
                Expr::value(state.cancellation_date),
            )
            .col_expr(entity::server::Column::CancellationReason, Expr::value(reason))
            .col_expr(entity::server::Column::Reserved, Expr::value(state.reserved))
            .filter(entity::server::Column::UserId.eq(lookup.owner_id))
            .filter(entity::server::Column::ServerNumber.eq(lookup.server_number))
            .filter(entity::server::Column::Cancelled.eq(expected_cancelled))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
