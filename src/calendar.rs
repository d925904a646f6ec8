//! Calendar arithmetic shared by the cycle calculator and the history bucketer.
//!
//! Calendar dates come from one explicit timezone. "Today" is derived from an
//! injected `SafeTimeProvider`, never from the system clock.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use hourglass_rs::SafeTimeProvider;

use crate::errors::{CalcError, Result};

/// number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// move a (year, month) pair by `offset` months, rolling the year as needed
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// date for `day` in the given month, clamped to the month's last day
pub fn clamped_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CalcError::DateOutOfRange {
        message: format!("{year:04}-{month:02}-{day:02}"),
    })
}

/// `date` moved by whole months, keeping the day where the target month allows
pub fn add_months_clamped(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let (year, month) = shift_month(date.year(), date.month(), months);
    clamped_date(year, month, date.day())
}

/// calendar date of an instant in the given timezone
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// today's calendar date according to the injected clock
pub fn local_today(time_provider: &SafeTimeProvider, tz: Tz) -> NaiveDate {
    local_date(time_provider.now(), tz)
}

/// whole calendar days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// parse an IANA timezone name such as "America/Lima"
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| CalcError::InvalidTimezone {
        name: name.to_string(),
    })
}
