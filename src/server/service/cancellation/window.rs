//! Calendar-day arithmetic for cancellation dates.
//!
//! All comparisons happen on `NaiveDate`; the time of day of the request only matters
//! when it pushes `now + 96h` onto the next day.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::server::{error::cancellation::CancellationError, model::cancellation::DATE_FORMAT};

/// Shortest lead time between the request and an explicitly chosen date.
pub const MINIMUM_NOTICE_HOURS: i64 = 96;

/// Lead time used when the caller does not choose a date.
pub const STANDARD_NOTICE_DAYS: i64 = 7;

/// First calendar day a caller may name as cancellation date.
pub fn earliest_legal_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(MINIMUM_NOTICE_HOURS)).date_naive()
}

/// Cancellation date applied when the request names none.
pub fn default_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::days(STANDARD_NOTICE_DAYS)).date_naive()
}

/// Resolves the requested date against the notice window.
///
/// A missing or blank value falls back to [`default_date`].
///
/// # Returns
/// - `Ok(NaiveDate)` - The date to store
/// - `Err(CancellationError::InvalidDateFormat)` - The value is not `YYYY-MM-DD`
/// - `Err(CancellationError::DateTooSoon)` - The date lies before [`earliest_legal_date`]
pub fn resolve_date(
    requested: Option<&str>,
    now: DateTime<Utc>,
) -> Result<NaiveDate, CancellationError> {
    let date = match requested.map(str::trim) {
        None | Some("") => default_date(now),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| CancellationError::InvalidDateFormat(value.to_string()))?,
    };

    let earliest = earliest_legal_date(now);
    if date < earliest {
        return Err(CancellationError::DateTooSoon {
            requested: date,
            earliest,
        });
    }

    Ok(date)
}
