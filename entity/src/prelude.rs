pub use super::server::Entity as Server;
pub use super::server_ip::Entity as ServerIp;
pub use super::user::Entity as User;
