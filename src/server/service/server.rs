use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{server::ServerError, AppError},
    model::server::{RenameServerParam, Server, ServerLookupParam},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every server of a user
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)`: At least one server, ordered by number
    /// - `Err(AppError::ServerErr(NoServers))`: The user owns no servers
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<Server>, AppError> {
        let repo = ServerRepository::new(self.db);

        let servers = repo.get_all_by_owner(owner_id).await?;
        if servers.is_empty() {
            return Err(ServerError::NoServers.into());
        }

        Ok(servers)
    }

    /// Gets a single server by number
    pub async fn get(&self, lookup: ServerLookupParam) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);

        repo.find_by_number(lookup)
            .await?
            .ok_or_else(|| ServerError::NotFound(lookup.server_number).into())
    }

    /// Renames a server and returns it with the new name
    ///
    /// # Returns
    /// - `Ok(Server)`: The renamed server
    /// - `Err(AppError::ServerErr(MissingServerName))`: The new name is blank
    /// - `Err(AppError::ServerErr(NotFound))`: No such server for this owner
    pub async fn rename(&self, param: RenameServerParam) -> Result<Server, AppError> {
        let server_name = param.server_name.trim();
        if server_name.is_empty() {
            return Err(ServerError::MissingServerName.into());
        }

        let repo = ServerRepository::new(self.db);

        if !repo.update_name(param.lookup, server_name).await? {
            return Err(ServerError::NotFound(param.lookup.server_number).into());
        }

        tracing::info!(
            server_number = param.lookup.server_number,
            "Renamed server to {}",
            server_name
        );

        self.get(param.lookup).await
    }
}
