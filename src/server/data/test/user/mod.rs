use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_username;
