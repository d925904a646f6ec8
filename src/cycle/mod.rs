pub mod calculator;
pub mod due_date;
pub mod period;
pub mod reconcile;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::progress::UtilizationBand;

pub use calculator::{available_credit, compute_cycle, utilization_pct, CycleCalculator};
pub use due_date::{BackendDueDate, ClosingDayHeuristic, DueDateResolver};
pub use period::StatementPeriod;
pub use reconcile::{reconcile, Reconciliation};

/// display-ready figures for one credit account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    pub available_credit: Money,
    /// 0..=100, two decimal places
    pub utilization_pct: Decimal,
    pub utilization_band: UtilizationBand,
    pub period: Option<StatementPeriod>,
    pub next_payment: Option<NaiveDate>,
    pub period_range_label: String,
    pub next_payment_label: String,
    pub reconciliation: Reconciliation,
}

impl CycleResult {
    /// export as pretty json
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// export as compact json
    pub fn json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
