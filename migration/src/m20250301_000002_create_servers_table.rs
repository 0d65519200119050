use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servers::Table)
                    .if_not_exists()
                    .col(pk_auto(Servers::Id))
                    .col(integer(Servers::UserId))
                    .col(integer_uniq(Servers::ServerNumber))
                    .col(string(Servers::ServerName))
                    .col(string(Servers::ServerIp).default(""))
                    .col(string(Servers::ServerIpv6Net).default(""))
                    .col(string(Servers::Product).default(""))
                    .col(string(Servers::Dc).default(""))
                    .col(string(Servers::Traffic).default(""))
                    .col(string(Servers::Status).default(""))
                    .col(date_null(Servers::PaidUntil))
                    .col(boolean(Servers::Reset).default(false))
                    .col(boolean(Servers::Rescue).default(false))
                    .col(boolean(Servers::Vnc).default(false))
                    .col(boolean(Servers::Windows).default(false))
                    .col(boolean(Servers::Plesk).default(false))
                    .col(boolean(Servers::Cpanel).default(false))
                    .col(boolean(Servers::Wol).default(false))
                    .col(boolean(Servers::HotSwap).default(false))
                    .col(integer_null(Servers::LinkedStoragebox))
                    .col(boolean(Servers::Cancelled).default(false))
                    .col(boolean(Servers::Reserved).default(false))
                    .col(date_null(Servers::CancellationDate))
                    .col(string_null(Servers::CancellationReason))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servers_user_id")
                            .from(Servers::Table, Servers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_servers_user_id")
                    .table(Servers::Table)
                    .col(Servers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servers {
    Table,
    Id,
    UserId,
    ServerNumber,
    ServerName,
    ServerIp,
    ServerIpv6Net,
    Product,
    Dc,
    Traffic,
    Status,
    PaidUntil,
    Reset,
    Rescue,
    Vnc,
    Windows,
    Plesk,
    Cpanel,
    Wol,
    HotSwap,
    LinkedStoragebox,
    Cancelled,
    Reserved,
    CancellationDate,
    CancellationReason,
}
