use chrono_tz::Tz;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_timezone;
use crate::decimal::Money;
use crate::errors::{CalcError, Result};
use crate::format::Locale;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// IANA timezone used to turn instants into calendar dates
    pub timezone: String,
    pub locale: Locale,
    pub labels: LabelSet,
    /// largest gap tolerated between total debt and its itemization
    pub reconciliation_tolerance: Money,
}

/// fixed display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    pub today: String,
    pub yesterday: String,
    /// shown in place of cycle dates that cannot be computed
    pub unavailable: String,
}

impl LabelSet {
    pub fn english() -> Self {
        Self {
            today: "Today".to_string(),
            yesterday: "Yesterday".to_string(),
            unavailable: "--".to_string(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            today: "Hoy".to_string(),
            yesterday: "Ayer".to_string(),
            unavailable: "--".to_string(),
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        LabelSet::english()
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            locale: Locale::English,
            labels: LabelSet::english(),
            reconciliation_tolerance: Money::from_decimal(dec!(0.01)),
        }
    }
}

impl CalculatorConfig {
    /// create configuration for Peruvian users (America/Lima, Spanish labels)
    pub fn lima() -> Self {
        Self {
            timezone: "America/Lima".to_string(),
            locale: Locale::Spanish,
            labels: LabelSet::spanish(),
            reconciliation_tolerance: Money::from_decimal(dec!(0.01)),
        }
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalcError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_reconciliation_tolerance(mut self, tolerance: Money) -> Self {
        self.reconciliation_tolerance = tolerance;
        self
    }

    /// resolved timezone
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn validate(&self) -> Result<()> {
        self.tz()?;

        if self.reconciliation_tolerance.is_negative() {
            return Err(CalcError::InvalidConfiguration {
                message: format!(
                    "reconciliation tolerance must not be negative, got {}",
                    self.reconciliation_tolerance
                ),
            });
        }

        Ok(())
    }
}
