use crate::constants::layout::KICKOFF_FORMAT;
use crate::error::AppError;
use chrono::{DateTime, FixedOffset};

/// Parses a provider kickoff timestamp, keeping the offset the provider sent.
///
/// The provider already converts kickoff times into the requested timezone,
/// so the offset is preserved for display rather than converted to local time.
///
/// # Examples
///
/// ```rust
/// use premcli::data_fetcher::processors::parse_kickoff;
///
/// let kickoff = parse_kickoff("2023-10-21T14:00:00+01:00").unwrap();
/// assert_eq!(kickoff.to_rfc3339(), "2023-10-21T14:00:00+01:00");
/// ```
pub fn parse_kickoff(timestamp: &str) -> Result<DateTime<FixedOffset>, AppError> {
    DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
        AppError::datetime_parse_error(format!("Failed to parse timestamp '{timestamp}': {e}"))
    })
}

/// Formats a kickoff for display, e.g. "21 Oct 2023, 02:00 PM".
///
/// # Examples
///
/// ```rust
/// use premcli::data_fetcher::processors::{format_kickoff, parse_kickoff};
///
/// let kickoff = parse_kickoff("2023-10-21T19:45:00+00:00").unwrap();
/// assert_eq!(format_kickoff(&kickoff), "21 Oct 2023, 07:45 PM");
/// ```
pub fn format_kickoff(kickoff: &DateTime<FixedOffset>) -> String {
    kickoff.format(KICKOFF_FORMAT).to_string()
}
