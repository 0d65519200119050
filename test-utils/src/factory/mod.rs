//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let server = factory::server::ServerFactory::new(&db, user.id)
//!     .server_number(321)
//!     .server_name("DS 3000 #1")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod server;
pub mod server_ip;
pub mod user;

pub use helpers::create_server_with_owner;
pub use server::create_server;
pub use server_ip::create_server_ip;
pub use user::create_user;
