use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// List entry envelope: `{"server": {...}}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerSummaryEnvelopeDto {
    pub server: ServerSummaryDto,
}

/// Server as shown in the server list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerSummaryDto {
    pub server_ip: String,
    pub server_ipv6_net: String,
    pub server_number: i32,
    pub server_name: String,
    pub product: String,
    pub dc: String,
    pub traffic: String,
    pub status: String,
    pub cancelled: bool,
    /// `YYYY-MM-DD`, empty when unknown.
    pub paid_until: String,
    pub ip: Vec<String>,
    pub subnet: Vec<SubnetDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubnetDto {
    pub ip: String,
    pub mask: String,
}

/// Single server envelope: `{"server": {...}}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerDetailEnvelopeDto {
    pub server: ServerDetailDto,
}

/// Server detail, the list fields plus the available management features.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerDetailDto {
    #[serde(flatten)]
    pub summary: ServerSummaryDto,
    pub reset: bool,
    pub rescue: bool,
    pub vnc: bool,
    pub windows: bool,
    pub plesk: bool,
    pub cpanel: bool,
    pub wol: bool,
    pub hot_swap: bool,
    pub linked_storagebox: Option<i32>,
}

/// Form body of `POST /server/{server_number}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct RenameServerDto {
    #[serde(default)]
    pub server_name: Option<String>,
}
