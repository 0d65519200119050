use crate::server::error::{server::ServerError, AppError};

/// Parses a server number from a path segment
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - A positive server number
/// - `Err(AppError::ServerErr(InvalidServerNumber))` - The segment is not a positive
///   integer that fits an `i32`
pub fn parse_server_number(value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ServerError::InvalidServerNumber(value.to_string()).into()),
    }
}
