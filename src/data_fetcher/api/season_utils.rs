//! Season detection utilities

use crate::constants::season::CUTOFF_MONTH;
use chrono::{Datelike, Local, NaiveDate};

/// Returns the provider season year for a date.
///
/// A season is named after the calendar year it starts in, so dates before
/// July belong to the season that started the previous year.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use premcli::data_fetcher::api::season_for_date;
///
/// assert_eq!(season_for_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()), 2023);
/// assert_eq!(season_for_date(NaiveDate::from_ymd_opt(2024, 8, 16).unwrap()), 2024);
/// ```
pub fn season_for_date(date: NaiveDate) -> i32 {
    if date.month() < CUTOFF_MONTH {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Season year for today's local date.
pub fn current_season() -> i32 {
    season_for_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_cutoff_boundaries() {
        assert_eq!(season_for_date(date(2024, 6, 30)), 2023);
        assert_eq!(season_for_date(date(2024, 7, 1)), 2024);
        assert_eq!(season_for_date(date(2024, 1, 1)), 2023);
        assert_eq!(season_for_date(date(2024, 12, 31)), 2024);
    }

    #[test]
    fn test_current_season_is_this_or_last_year() {
        let year = Local::now().year();
        let season = current_season();
        assert!(season == year || season == year - 1);
    }
}
