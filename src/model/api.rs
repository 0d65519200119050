use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
///
/// Serialized as `{"error": {"status": 404, "code": "SERVER_NOT_FOUND", "message": "..."}}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: ErrorBodyDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorBodyDto {
    /// HTTP status code, repeated in the body for clients that only read JSON.
    pub status: u16,
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorDto {
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBodyDto {
                status,
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Plain acknowledgement body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
