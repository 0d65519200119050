mod server;
mod user;
