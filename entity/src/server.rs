use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub server_number: i32,
    pub server_name: String,
    pub server_ip: String,
    pub server_ipv6_net: String,
    pub product: String,
    pub dc: String,
    pub traffic: String,
    pub status: String,
    pub paid_until: Option<Date>,
    pub reset: bool,
    pub rescue: bool,
    pub vnc: bool,
    pub windows: bool,
    pub plesk: bool,
    pub cpanel: bool,
    pub wol: bool,
    pub hot_swap: bool,
    pub linked_storagebox: Option<i32>,
    pub cancelled: bool,
    pub reserved: bool,
    pub cancellation_date: Option<Date>,
    pub cancellation_reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::server_ip::Entity")]
    ServerIp,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::server_ip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerIp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
