use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::decimal::{Money, Rate};

/// credit utilization bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationBand {
    Healthy,   // <= 50%
    Warning,   // 50-90%
    Danger,    // > 90%
}

impl UtilizationBand {
    pub fn from_percentage(pct: Decimal) -> Self {
        if pct > dec!(90) {
            UtilizationBand::Danger
        } else if pct > dec!(50) {
            UtilizationBand::Warning
        } else {
            UtilizationBand::Healthy
        }
    }
}

/// budget health by spent / limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    OnTrack,
    Warning,
    Danger,
    Exceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub ratio: Rate,
    /// progress bar width in percent, never above 100
    pub bar_width_pct: Decimal,
    pub health: BudgetHealth,
}

/// smallest visible bar when anything has been spent
const MIN_BAR_WIDTH: Decimal = dec!(2);

pub fn budget_progress(limit: Money, spent: Money) -> BudgetProgress {
    let ratio = Rate::ratio(spent, limit).unwrap_or(Rate::ZERO);
    let r = ratio.as_decimal();

    let pct = ratio.as_percentage();
    let bar_width_pct = if pct > Decimal::ZERO && pct < MIN_BAR_WIDTH {
        MIN_BAR_WIDTH
    } else {
        pct.min(dec!(100)).max(Decimal::ZERO)
    };

    let health = if r >= dec!(1.0) {
        BudgetHealth::Exceeded
    } else if r >= dec!(0.9) {
        BudgetHealth::Danger
    } else if r >= dec!(0.7) {
        BudgetHealth::Warning
    } else {
        BudgetHealth::OnTrack
    };

    BudgetProgress {
        ratio,
        bar_width_pct: bar_width_pct.round_dp(2),
        health,
    }
}

/// savings goal bar width from the backend's progress ratio
pub fn goal_progress(progress: Rate) -> Decimal {
    progress.as_percentage().clamp(Decimal::ZERO, dec!(100))
}

/// bill status relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BillStatus {
    Paid,
    Overdue { days_late: u32 },
    DueToday,
    Urgent { days_left: u32 },
    Pending { days_left: u32 },
}

/// days left before a bill becomes urgent
pub const URGENT_WITHIN_DAYS: u32 = 3;

pub fn bill_status(due: NaiveDate, today: NaiveDate, paid: bool) -> BillStatus {
    if paid {
        return BillStatus::Paid;
    }

    let diff = days_between(today, due);
    match diff {
        d if d < 0 => BillStatus::Overdue { days_late: d.unsigned_abs() as u32 },
        0 => BillStatus::DueToday,
        d if d as u32 <= URGENT_WITHIN_DAYS => BillStatus::Urgent { days_left: d as u32 },
        d => BillStatus::Pending { days_left: d as u32 },
    }
}
