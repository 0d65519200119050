use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_servers_table::Servers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerIps::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerIps::Id))
                    .col(integer(ServerIps::ServerId))
                    .col(string_len(ServerIps::IpAddress, 45))
                    .col(string_len(ServerIps::Mask, 15))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_ips_server_id")
                            .from(ServerIps::Table, ServerIps::ServerId)
                            .to(Servers::Table, Servers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerIps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerIps {
    Table,
    Id,
    ServerId,
    IpAddress,
    Mask,
}
