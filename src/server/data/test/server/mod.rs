use crate::server::{
    data::server::{ServerRepository, ServerStore},
    model::{
        cancellation::{CancellationReason, CancellationState},
        server::ServerLookupParam,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_number;
mod find_cancellation;
mod get_all_by_owner;
mod save_cancellation;
mod update_name;

fn lookup(owner_id: i32, server_number: i32) -> ServerLookupParam {
    ServerLookupParam {
        owner_id,
        server_number,
    }
}
