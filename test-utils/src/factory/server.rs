//! Server factory for creating test dedicated server entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// Servers are created in the active state (`cancelled = false`) unless a
/// cancellation is configured through [`ServerFactory::cancelled`].
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, user.id)
///     .server_name("DS 3000 #1")
///     .cancelled(date, Some("Server too expensive"))
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    server_number: i32,
    server_name: String,
    server_ip: String,
    product: String,
    cancelled: bool,
    reserved: bool,
    cancellation_date: Option<NaiveDate>,
    cancellation_reason: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - server_number: `100000 + id` where id is auto-incremented
    /// - server_name: `"server{id}"`
    /// - server_ip: `"192.0.2.{id % 250}"`
    /// - product: `"EX44"`
    /// - not cancelled, not reserved
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user's ID
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            server_number: 100_000 + id as i32,
            server_name: format!("server{}", id),
            server_ip: format!("192.0.2.{}", id % 250),
            product: "EX44".to_string(),
            cancelled: false,
            reserved: false,
            cancellation_date: None,
            cancellation_reason: None,
        }
    }

    /// Sets the unique server number.
    pub fn server_number(mut self, server_number: i32) -> Self {
        self.server_number = server_number;
        self
    }

    /// Sets the display name of the server.
    pub fn server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Sets the primary IPv4 address of the server.
    pub fn server_ip(mut self, server_ip: impl Into<String>) -> Self {
        self.server_ip = server_ip.into();
        self
    }

    /// Sets the product name of the server.
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Marks the server as already cancelled with the given date and reason.
    pub fn cancelled(mut self, date: NaiveDate, reason: Option<&str>) -> Self {
        self.cancelled = true;
        self.cancellation_date = Some(date);
        self.cancellation_reason = reason.map(str::to_string);
        self
    }

    /// Sets the reserved flag. Only meaningful on cancelled servers.
    pub fn reserved(mut self, reserved: bool) -> Self {
        self.reserved = reserved;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            server_number: ActiveValue::Set(self.server_number),
            server_name: ActiveValue::Set(self.server_name),
            server_ip: ActiveValue::Set(self.server_ip),
            server_ipv6_net: ActiveValue::Set("2001:db8::".to_string()),
            product: ActiveValue::Set(self.product),
            dc: ActiveValue::Set("FSN1-DC14".to_string()),
            traffic: ActiveValue::Set("unlimited".to_string()),
            status: ActiveValue::Set("ready".to_string()),
            paid_until: ActiveValue::Set(NaiveDate::from_ymd_opt(2030, 12, 31)),
            reset: ActiveValue::Set(true),
            rescue: ActiveValue::Set(true),
            vnc: ActiveValue::Set(false),
            windows: ActiveValue::Set(false),
            plesk: ActiveValue::Set(false),
            cpanel: ActiveValue::Set(false),
            wol: ActiveValue::Set(true),
            hot_swap: ActiveValue::Set(false),
            linked_storagebox: ActiveValue::Set(None),
            cancelled: ActiveValue::Set(self.cancelled),
            reserved: ActiveValue::Set(self.reserved),
            cancellation_date: ActiveValue::Set(self.cancellation_date),
            cancellation_reason: ActiveValue::Set(self.cancellation_reason),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active server with default values for the given owner.
pub async fn create_server(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, user_id).build().await
}
