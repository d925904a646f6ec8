pub mod calendar;
pub mod config;
pub mod cycle;
pub mod decimal;
pub mod errors;
pub mod exposure;
pub mod filter;
pub mod format;
pub mod history;
pub mod progress;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, LabelSet};
pub use cycle::{
    compute_cycle, reconcile, BackendDueDate, ClosingDayHeuristic, CycleCalculator, CycleResult,
    DueDateResolver, Reconciliation, StatementPeriod,
};
pub use decimal::{Currency, Money, Rate};
pub use errors::{CalcError, Result};
pub use exposure::{aggregate, partition, ExposureTotals};
pub use filter::{Filterable, ListFilter};
pub use format::{DateFormatter, DateStyle, Locale};
pub use history::{bucket, parse_occurred_at, DailyBucket, DateBucketer};
pub use progress::{bill_status, budget_progress, goal_progress, BillStatus, BudgetHealth, BudgetProgress, UtilizationBand};
pub use types::{
    AccountId, AccountKind, AccountSnapshot, CreditAccountSnapshot, DatedRecord, DayOfMonth,
    RawRecord, RecordId, RecordKind,
};

// re-export external dependencies that users will need
pub use chrono;
pub use chrono_tz::Tz;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
