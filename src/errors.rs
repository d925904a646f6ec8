use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid day of month for {field}: {value} is outside 1..=31")]
    InvalidDayOfMonth {
        field: &'static str,
        value: u32,
    },

    #[error("malformed timestamp '{value}': {message}")]
    MalformedTimestamp {
        value: String,
        message: String,
    },

    #[error("negative amount for {field}: {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: Money,
    },

    #[error("invalid timezone: {name}")]
    InvalidTimezone {
        name: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("date out of range: {message}")]
    DateOutOfRange {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
