//! Server IP factory for attaching addresses and subnets to test servers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an address row for a server.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Primary key of the owning server row
/// - `ip_address` - IPv4 or IPv6 address
/// - `mask` - Prefix length or netmask as stored by the provisioning system
///
/// # Returns
/// - `Ok(entity::server_ip::Model)` - Created server IP entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_ip(
    db: &DatabaseConnection,
    server_id: i32,
    ip_address: impl Into<String>,
    mask: impl Into<String>,
) -> Result<entity::server_ip::Model, DbErr> {
    entity::server_ip::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        ip_address: ActiveValue::Set(ip_address.into()),
        mask: ActiveValue::Set(mask.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
