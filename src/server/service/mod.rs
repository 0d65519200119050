//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying the cancellation rules and input validation
//! - **Orchestration**: Loading records, deciding, and writing the outcome back
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod cancellation;
pub mod server;
pub mod user;
