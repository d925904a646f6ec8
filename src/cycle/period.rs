use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{clamped_date, days_between, shift_month};
use crate::errors::{CalcError, Result};
use crate::format::{DateFormatter, DateStyle};
use crate::types::DayOfMonth;

/// billing period between two consecutive closing dates, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatementPeriod {
    /// period that contains `today` for the given closing day
    ///
    /// On or before the closing day the period closes this month; after it,
    /// the period closes next month. A closing day past the end of a month
    /// falls on that month's last day.
    pub fn containing(today: NaiveDate, closing_day: DayOfMonth) -> Result<Self> {
        let closes_next_month = today.day() > closing_day.get();
        let end_offset = if closes_next_month { 1 } else { 0 };

        let (end_year, end_month) = shift_month(today.year(), today.month(), end_offset);
        let (prev_year, prev_month) = shift_month(today.year(), today.month(), end_offset - 1);

        let end = clamped_date(end_year, end_month, closing_day.get())?;
        let previous_close = clamped_date(prev_year, prev_month, closing_day.get())?;
        let start = previous_close.succ_opt().ok_or_else(|| CalcError::DateOutOfRange {
            message: format!("day after {previous_close}"),
        })?;

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// number of days in the period
    pub fn len_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// "<start> - <end>" in short form
    pub fn label(&self, formatter: &dyn DateFormatter) -> String {
        format!(
            "{} - {}",
            formatter.format_date(self.start, DateStyle::Short),
            formatter.format_date(self.end, DateStyle::Short)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(d: u32) -> DayOfMonth {
        DayOfMonth::new(d).unwrap()
    }

    #[test]
    fn test_period_before_closing_crosses_year() {
        let period = StatementPeriod::containing(date(2024, 1, 5), day(20)).unwrap();
        assert_eq!(period.start, date(2023, 12, 21));
        assert_eq!(period.end, date(2024, 1, 20));
    }

    #[test]
    fn test_period_after_closing() {
        let period = StatementPeriod::containing(date(2024, 6, 20), day(15)).unwrap();
        assert_eq!(period.start, date(2024, 6, 16));
        assert_eq!(period.end, date(2024, 7, 15));
    }

    #[test]
    fn test_period_on_closing_day_closes_today() {
        let period = StatementPeriod::containing(date(2024, 6, 15), day(15)).unwrap();
        assert_eq!(period.end, date(2024, 6, 15));
        assert_eq!(period.start, date(2024, 5, 16));
    }

    #[test]
    fn test_period_after_closing_in_december() {
        let period = StatementPeriod::containing(date(2024, 12, 28), day(25)).unwrap();
        assert_eq!(period.start, date(2024, 12, 26));
        assert_eq!(period.end, date(2025, 1, 25));
    }

    #[test]
    fn test_closing_31_clamps_in_30_day_month() {
        let period = StatementPeriod::containing(date(2024, 4, 10), day(31)).unwrap();
        assert_eq!(period.end, date(2024, 4, 30));
        assert_eq!(period.start, date(2024, 4, 1));
    }

    #[test]
    fn test_closing_31_clamps_in_february() {
        let period = StatementPeriod::containing(date(2024, 3, 15), day(31)).unwrap();
        assert_eq!(period.start, date(2024, 3, 1));
        assert_eq!(period.end, date(2024, 3, 31));

        let period = StatementPeriod::containing(date(2023, 2, 28), day(30)).unwrap();
        assert_eq!(period.end, date(2023, 2, 28));
        assert_eq!(period.start, date(2023, 1, 31));
    }

    #[test]
    fn test_period_always_contains_today() {
        let mut today = date(2023, 12, 1);
        while today <= date(2025, 1, 31) {
            for closing in [1, 15, 28, 29, 30, 31] {
                let period = StatementPeriod::containing(today, day(closing)).unwrap();
                assert!(period.contains(today), "{today} not in {period:?} (closing {closing})");
                assert!(period.len_days() >= 28 && period.len_days() <= 31);
            }
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_period_label() {
        let period = StatementPeriod::containing(date(2024, 6, 20), day(15)).unwrap();
        assert_eq!(period.label(&Locale::English), "Jun 16 - Jul 15");
        assert_eq!(period.label(&Locale::Spanish), "16 jun - 15 jul");
    }
}
