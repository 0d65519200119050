//! Cancellation domain models.
//!
//! Holds the closed catalog of cancellation reasons, the cancellation-relevant subset
//! of a server record, the parameters of a scheduling request and the read-only view
//! that is shaped into the `{"cancellation": {...}}` response.

use chrono::NaiveDate;
use std::fmt;

use crate::{
    model::cancellation::{
        CancellationDto, CancellationEnvelopeDto, CancellationReasonDto, ScheduleCancellationDto,
    },
    server::error::{cancellation::CancellationError, internal::InternalError, AppError},
};

/// Wire format of every cancellation date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Server name fragment that marks a server as eligible for location reservation.
///
/// Only dedicated server lines ("DS ...") can keep their rack location after
/// cancellation. The match is case-sensitive.
pub const RESERVATION_NAME_MARKER: &str = "DS";

/// A reason a customer may give when cancelling a server.
///
/// The set is closed; `ALL` lists every variant in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancellationReason {
    UpgradeToNewServer,
    DissatisfiedWithHardware,
    DissatisfiedWithSupport,
    DissatisfiedWithNetwork,
    DissatisfiedWithIpAllocation,
    DissatisfiedWithWebInterface,
    DissatisfiedWithTerms,
    ProjectEnded,
    TooExpensive,
}

impl CancellationReason {
    /// Every reason, in the order it is shown to clients.
    pub const ALL: [CancellationReason; 9] = [
        Self::UpgradeToNewServer,
        Self::DissatisfiedWithHardware,
        Self::DissatisfiedWithSupport,
        Self::DissatisfiedWithNetwork,
        Self::DissatisfiedWithIpAllocation,
        Self::DissatisfiedWithWebInterface,
        Self::DissatisfiedWithTerms,
        Self::ProjectEnded,
        Self::TooExpensive,
    ];

    /// Exact text accepted on the wire and stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpgradeToNewServer => "Upgrade to a new server",
            Self::DissatisfiedWithHardware => "Dissatisfied with the hardware",
            Self::DissatisfiedWithSupport => "Dissatisfied with the support",
            Self::DissatisfiedWithNetwork => "Dissatisfied with the network",
            Self::DissatisfiedWithIpAllocation => "Dissatisfied with the IP/subnet allocation",
            Self::DissatisfiedWithWebInterface => "Dissatisfied with the Robot webinterface",
            Self::DissatisfiedWithTerms => "Dissatisfied with the official Terms and Conditions",
            Self::ProjectEnded => "Server no longer necessary due to project ending",
            Self::TooExpensive => "Server too expensive",
        }
    }

    /// Looks up the reason whose text matches `value` exactly.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == value)
    }

    /// Whether `value` is the exact text of a catalog entry.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// The full catalog, in display order.
    pub fn all() -> &'static [CancellationReason] {
        &Self::ALL
    }
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a server with this display name may reserve its location on cancellation.
pub fn reservation_possible(server_name: &str) -> bool {
    server_name.contains(RESERVATION_NAME_MARKER)
}

/// The four fields owned by the cancellation workflow.
///
/// `Default` is the active, never-cancelled state. A value built by the policy
/// always satisfies: not cancelled implies no date, no reason and not reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancellationState {
    pub cancelled: bool,
    pub cancellation_date: Option<NaiveDate>,
    pub cancellation_reason: Option<CancellationReason>,
    pub reserved: bool,
}

/// Cancellation-relevant view of a server record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCancellation {
    pub server_number: i32,
    pub server_name: String,
    pub server_ip: String,
    pub server_ipv6_net: String,
    pub state: CancellationState,
}

impl ServerCancellation {
    /// Derived from the server name, never stored.
    pub fn reservation_possible(&self) -> bool {
        reservation_possible(&self.server_name)
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ServerCancellation)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownCancellationReason))` - The stored reason is
    ///   not part of the catalog
    pub fn from_entity(entity: entity::server::Model) -> Result<Self, AppError> {
        let cancellation_reason = match entity.cancellation_reason {
            None => None,
            Some(value) if value.is_empty() => None,
            Some(value) => Some(CancellationReason::parse(&value).ok_or(
                InternalError::UnknownCancellationReason {
                    server_number: entity.server_number,
                    value,
                },
            )?),
        };

        Ok(Self {
            server_number: entity.server_number,
            server_name: entity.server_name,
            server_ip: entity.server_ip,
            server_ipv6_net: entity.server_ipv6_net,
            state: CancellationState {
                cancelled: entity.cancelled,
                cancellation_date: entity.cancellation_date,
                cancellation_reason,
                reserved: entity.reserved,
            },
        })
    }
}

/// Parameters for scheduling a cancellation.
///
/// Every field is kept as raw text. The policy parses them only after it has
/// checked the record, so a cancelled server reports a conflict whatever the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCancellationParam {
    pub cancellation_date: Option<String>,
    pub cancellation_reason: Option<String>,
    pub reserve_location: Option<String>,
}

impl ScheduleCancellationParam {
    /// Converts the form body.
    pub fn from_dto(dto: ScheduleCancellationDto) -> Self {
        Self {
            cancellation_date: dto.cancellation_date,
            cancellation_reason: dto.cancellation_reason,
            reserve_location: dto.reserve_location,
        }
    }

    /// Parses the textual `reserve_location` flag.
    ///
    /// `"true"` and `"false"` are accepted case-insensitively; a missing or empty value
    /// means `false`.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether a reservation was requested
    /// - `Err(CancellationError::InvalidReserveLocation)` - Any other flag value
    pub fn reserve_location(&self) -> Result<bool, CancellationError> {
        match self.reserve_location.as_deref().map(str::trim) {
            None | Some("") => Ok(false),
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => Err(CancellationError::InvalidReserveLocation(value.to_string())),
        }
    }
}

/// Read-only description of a server's cancellation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationView {
    pub server: ServerCancellation,
    /// Earliest date a new request may name, computed from the request time.
    pub earliest_cancellation_date: NaiveDate,
}

impl CancellationView {
    /// Shapes the view into the wire response.
    ///
    /// A server that is not cancelled lists the whole reason catalog and a `null` date.
    /// A cancelled server shows its stored date and the single stored reason, which is
    /// an empty string when none was given.
    pub fn into_dto(self) -> CancellationEnvelopeDto {
        let reservation_possible = self.server.reservation_possible();
        let state = self.server.state;

        let (cancellation_date, cancellation_reason) = if state.cancelled {
            (
                state
                    .cancellation_date
                    .map(|date| date.format(DATE_FORMAT).to_string()),
                CancellationReasonDto::Chosen(
                    state
                        .cancellation_reason
                        .map(|reason| reason.as_str().to_string())
                        .unwrap_or_default(),
                ),
            )
        } else {
            (
                None,
                CancellationReasonDto::Catalog(
                    CancellationReason::all()
                        .iter()
                        .map(|reason| reason.as_str().to_string())
                        .collect(),
                ),
            )
        };

        CancellationEnvelopeDto {
            cancellation: CancellationDto {
                server_ip: self.server.server_ip,
                server_ipv6_net: self.server.server_ipv6_net,
                server_number: self.server.server_number,
                server_name: self.server.server_name,
                earliest_cancellation_date: self
                    .earliest_cancellation_date
                    .format(DATE_FORMAT)
                    .to_string(),
                cancelled: state.cancelled,
                reservation_possible,
                reserved: state.reserved,
                cancellation_date,
                cancellation_reason,
            },
        }
    }
}
