//! Wire-level DTOs shared by every HTTP endpoint.

pub mod api;
pub mod cancellation;
pub mod server;
pub mod user;
