//! Утилиты для работы с датами
//!
//! Dates travel to the API as `YYYY-MM-DD` strings built from the value's own
//! calendar fields.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Format a calendar date as `YYYY-MM-DD`
///
/// Uses the year, month and day-of-month of the value as given, so a
/// `DateTime<Local>` keeps its local date instead of being shifted to UTC.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use contracts::shared::date_utils::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(format_date(&date), "2024-01-05");
/// ```
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse `YYYY-MM-DD` as produced by `<input type="date">`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Текущая дата по локальному календарю
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First and last day of the given month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_start - Duration::days(1)))
}

/// Bounds of the month preceding the one `date` falls in
pub fn previous_month(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    month_bounds(year, month)
}
