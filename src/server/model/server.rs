//! Server domain models and parameters.
//!
//! Provides the dedicated server model used by the listing, detail and rename
//! endpoints, together with the lookup parameters shared by every per-server
//! operation.

use chrono::NaiveDate;

use crate::{
    model::server::{
        ServerDetailDto, ServerDetailEnvelopeDto, ServerSummaryDto, ServerSummaryEnvelopeDto,
        SubnetDto,
    },
    server::model::cancellation::DATE_FORMAT,
};

/// Dedicated server with its addresses and management features.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub server_number: i32,
    pub server_name: String,
    pub server_ip: String,
    pub server_ipv6_net: String,
    pub product: String,
    pub dc: String,
    pub traffic: String,
    pub status: String,
    pub cancelled: bool,
    pub paid_until: Option<NaiveDate>,
    /// Additional addresses and subnets assigned to the server.
    pub ips: Vec<ServerIp>,
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

/// An address or subnet assigned to a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIp {
    pub ip_address: String,
    pub mask: String,
}

impl Server {
    /// Converts a server entity and its address rows at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The server row
    /// - `ips` - Address rows belonging to the server
    pub fn from_entity(entity: entity::server::Model, ips: Vec<entity::server_ip::Model>) -> Self {
        Self {
            server_number: entity.server_number,
            server_name: entity.server_name,
            server_ip: entity.server_ip,
            server_ipv6_net: entity.server_ipv6_net,
            product: entity.product,
            dc: entity.dc,
            traffic: entity.traffic,
            status: entity.status,
            cancelled: entity.cancelled,
            paid_until: entity.paid_until,
            ips: ips
                .into_iter()
                .map(|ip| ServerIp {
                    ip_address: ip.ip_address,
                    mask: ip.mask,
                })
                .collect(),
            reset: entity.reset,
            rescue: entity.rescue,
            vnc: entity.vnc,
            windows: entity.windows,
            plesk: entity.plesk,
            cpanel: entity.cpanel,
            wol: entity.wol,
            hot_swap: entity.hot_swap,
            linked_storagebox: entity.linked_storagebox,
        }
    }

    fn summary_dto(&self) -> ServerSummaryDto {
        ServerSummaryDto {
            server_ip: self.server_ip.clone(),
            server_ipv6_net: self.server_ipv6_net.clone(),
            server_number: self.server_number,
            server_name: self.server_name.clone(),
            product: self.product.clone(),
            dc: self.dc.clone(),
            traffic: self.traffic.clone(),
            status: self.status.clone(),
            cancelled: self.cancelled,
            paid_until: self
                .paid_until
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            ip: self.ips.iter().map(|ip| ip.ip_address.clone()).collect(),
            subnet: self
                .ips
                .iter()
                .map(|ip| SubnetDto {
                    ip: ip.ip_address.clone(),
                    mask: ip.mask.clone(),
                })
                .collect(),
        }
    }

    /// Converts the server into a list entry.
    pub fn into_summary_dto(self) -> ServerSummaryEnvelopeDto {
        ServerSummaryEnvelopeDto {
            server: self.summary_dto(),
        }
    }

    /// Converts the server into the detail response.
    pub fn into_detail_dto(self) -> ServerDetailEnvelopeDto {
        ServerDetailEnvelopeDto {
            server: ServerDetailDto {
                summary: self.summary_dto(),
                reset: self.reset,
                rescue: self.rescue,
                vnc: self.vnc,
                windows: self.windows,
                plesk: self.plesk,
                cpanel: self.cpanel,
                wol: self.wol,
                hot_swap: self.hot_swap,
                linked_storagebox: self.linked_storagebox,
            },
        }
    }
}

/// Identifies one server within the authenticated user's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerLookupParam {
    /// ID of the authenticated user.
    pub owner_id: i32,
    /// Public server number.
    pub server_number: i32,
}

/// Parameters for renaming a server.
#[derive(Debug, Clone)]
pub struct RenameServerParam {
    pub lookup: ServerLookupParam,
    pub server_name: String,
}
