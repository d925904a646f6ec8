use chrono::{Datelike, NaiveDate};

use crate::calendar::{clamped_date, shift_month};
use crate::errors::Result;
use crate::types::DayOfMonth;

/// strategy for the next payment due date
pub trait DueDateResolver {
    fn next_due_date(
        &self,
        today: NaiveDate,
        closing_day: DayOfMonth,
        payment_day: DayOfMonth,
    ) -> Result<NaiveDate>;
}

/// payment day of this month, or of next month when it falls before the closing day
///
/// This approximates the usual "close on the 20th, pay on the 5th" layout and
/// is not tied to the date the statement was actually generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosingDayHeuristic;

impl DueDateResolver for ClosingDayHeuristic {
    fn next_due_date(
        &self,
        today: NaiveDate,
        closing_day: DayOfMonth,
        payment_day: DayOfMonth,
    ) -> Result<NaiveDate> {
        let month_offset = if payment_day < closing_day { 1 } else { 0 };
        let (year, month) = shift_month(today.year(), today.month(), month_offset);
        clamped_date(year, month, payment_day.get())
    }
}

/// due date reported by the backend, used as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendDueDate(pub NaiveDate);

impl DueDateResolver for BackendDueDate {
    fn next_due_date(&self, _today: NaiveDate, _closing: DayOfMonth, _payment: DayOfMonth) -> Result<NaiveDate> {
        Ok(self.0)
    }
}
