use thiserror::Error;

/// Internal issues indicating inconsistent stored data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored cancellation reason is not part of the reason catalog.
    ///
    /// Rows are only written through the cancellation workflow, which validates
    /// reasons, so this indicates data written by another process. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Stored cancellation reason '{value}' for server {server_number} is not a known reason")]
    UnknownCancellationReason {
        /// The server whose row holds the value
        server_number: i32,
        /// The stored value
        value: String,
    },
}
