use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{CalcError, Result};
use crate::types::{DatedRecord, RawRecord};

/// local layouts accepted when the value carries no offset
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// parse a transaction timestamp
///
/// Values with an offset (RFC 3339) are taken as-is. Values without one are
/// wall-clock times in `tz`, and a bare date is local midnight.
pub fn parse_occurred_at(value: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, format) {
            return localize(local, tz, value);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return localize(date.and_time(NaiveTime::MIN), tz, value);
    }

    Err(CalcError::MalformedTimestamp {
        value: value.to_string(),
        message: "expected RFC 3339, YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD".to_string(),
    })
}

fn localize(local: NaiveDateTime, tz: Tz, original: &str) -> Result<DateTime<Utc>> {
    // earliest() picks the first instant of an ambiguous DST hour
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CalcError::MalformedTimestamp {
            value: original.to_string(),
            message: format!("local time does not exist in {}", tz.name()),
        })
}

impl DatedRecord {
    /// validate a backend record's timestamp
    pub fn from_raw(raw: RawRecord, tz: Tz) -> Result<Self> {
        let occurred_at = parse_occurred_at(&raw.transaction_date, tz)?;
        Ok(Self {
            id: raw.id,
            occurred_at,
            kind: raw.kind,
            amount: raw.amount,
            description: raw.description,
        })
    }
}
