//! SeaORM entities for the dedicated server emulator.

pub mod prelude;

pub mod server;
pub mod server_ip;
pub mod user;
