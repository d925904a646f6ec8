use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// how much of a date a label should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyle {
    /// day and abbreviated month ("Jun 16")
    Short,
    /// day, full month and year ("July 5, 2024")
    Long,
    /// weekday, day and abbreviated month ("Friday, Mar 1")
    Weekday,
}

/// locale-aware date formatting supplied by the caller
///
/// Any `Fn(NaiveDate, DateStyle) -> String` closure is a formatter.
pub trait DateFormatter {
    fn format_date(&self, date: NaiveDate, style: DateStyle) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(NaiveDate, DateStyle) -> String,
{
    fn format_date(&self, date: NaiveDate, style: DateStyle) -> String {
        self(date, style)
    }
}

/// built-in locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

const MONTHS_ES_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun",
    "jul", "ago", "sept", "oct", "nov", "dic",
];

const WEEKDAYS_ES: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

impl DateFormatter for Locale {
    fn format_date(&self, date: NaiveDate, style: DateStyle) -> String {
        match self {
            Locale::English => match style {
                DateStyle::Short => date.format("%b %-d").to_string(),
                DateStyle::Long => date.format("%B %-d, %Y").to_string(),
                DateStyle::Weekday => date.format("%A, %b %-d").to_string(),
            },
            Locale::Spanish => {
                let month = date.month0() as usize;
                match style {
                    DateStyle::Short => format!("{} {}", date.day(), MONTHS_ES_SHORT[month]),
                    DateStyle::Long => {
                        format!("{} de {} de {}", date.day(), MONTHS_ES[month], date.year())
                    }
                    DateStyle::Weekday => {
                        let weekday = date.weekday().num_days_from_monday() as usize;
                        format!("{}, {} {}", WEEKDAYS_ES[weekday], date.day(), MONTHS_ES_SHORT[month])
                    }
                }
            }
        }
    }
}
