use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for cancellation responses: `{"cancellation": {...}}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CancellationEnvelopeDto {
    pub cancellation: CancellationDto,
}

/// Cancellation status of a single server.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CancellationDto {
    pub server_ip: String,
    pub server_ipv6_net: String,
    pub server_number: i32,
    pub server_name: String,
    /// Earliest date a caller may request, formatted `YYYY-MM-DD`.
    pub earliest_cancellation_date: String,
    pub cancelled: bool,
    pub reservation_possible: bool,
    pub reserved: bool,
    /// Effective cancellation date (`YYYY-MM-DD`), `null` while not cancelled.
    pub cancellation_date: Option<String>,
    pub cancellation_reason: CancellationReasonDto,
}

/// The `cancellation_reason` field changes shape with the cancellation state.
///
/// While the server is not cancelled it lists every accepted reason; once cancelled
/// it carries the single stored reason, or an empty string when none was given.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum CancellationReasonDto {
    Catalog(Vec<String>),
    Chosen(String),
}

/// Form body of `POST /server/{server_number}/cancellation`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ScheduleCancellationDto {
    /// Requested date, `YYYY-MM-DD`. Defaults to seven days from now.
    #[serde(default)]
    pub cancellation_date: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    /// `"true"` or `"false"`.
    #[serde(default)]
    pub reserve_location: Option<String>,
}
