use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalcError, Result};

/// identifier assigned to an account by the backend
pub type AccountId = u64;

/// identifier assigned to a transaction by the backend
pub type RecordId = u64;

/// day of month in 1..=31
///
/// The range is checked on construction and on deserialization. Whether the
/// day exists in a given month is not; month arithmetic clamps it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    pub const FIRST: DayOfMonth = DayOfMonth(1);
    pub const LAST: DayOfMonth = DayOfMonth(31);

    /// create a day of month, rejecting anything outside 1..=31
    pub fn new(day: u32) -> Result<Self> {
        Self::checked("day", day)
    }

    fn checked(field: &'static str, day: u32) -> Result<Self> {
        if (1..=31).contains(&day) {
            Ok(DayOfMonth(day as u8))
        } else {
            Err(CalcError::InvalidDayOfMonth { field, value: day })
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self> {
        DayOfMonth::new(value as u32)
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> u8 {
        day.0
    }
}

/// account types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    #[serde(rename = "EFECTIVO", alias = "CASH")]
    Cash,
    #[serde(rename = "DEBITO", alias = "DEBIT")]
    Debit,
    #[serde(rename = "CREDITO", alias = "CREDIT")]
    Credit,
}

impl AccountKind {
    /// cash and debit balances are immediately spendable
    pub fn is_liquid(&self) -> bool {
        matches!(self, AccountKind::Cash | AccountKind::Debit)
    }
}

/// transaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "INGRESO", alias = "INFLOW")]
    Inflow,
    #[serde(rename = "GASTO", alias = "OUTFLOW")]
    Outflow,
    #[serde(rename = "TRANSFERENCIA", alias = "TRANSFER")]
    Transfer,
}

impl RecordKind {
    /// signed effect on a household total; transfers move money between own accounts
    pub fn net_effect(&self, amount: Money) -> Money {
        match self {
            RecordKind::Inflow => amount,
            RecordKind::Outflow => -amount,
            RecordKind::Transfer => Money::ZERO,
        }
    }
}

/// account row as supplied by the account service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub id: AccountId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(alias = "initialBalance")]
    pub balance: Money,
    pub is_active: bool,
}

impl AccountSnapshot {
    pub fn new(id: AccountId, name: &str, kind: AccountKind, balance: Money) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            balance,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// credit account configuration and balances
///
/// `total_debt` is the authoritative exposure figure. The statement and
/// current-cycle amounts are an itemization for display and are not required
/// to add up to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccountSnapshot {
    pub credit_limit: Money,
    pub total_debt: Money,
    #[serde(default)]
    pub statement_amount: Money,
    #[serde(default)]
    pub current_cycle_amount: Money,
    #[serde(default, alias = "closingDate")]
    pub closing_day: Option<DayOfMonth>,
    #[serde(default, alias = "paymentDate")]
    pub payment_day: Option<DayOfMonth>,
}

impl CreditAccountSnapshot {
    pub fn new(credit_limit: Money, total_debt: Money) -> Self {
        Self {
            credit_limit,
            total_debt,
            statement_amount: Money::ZERO,
            current_cycle_amount: Money::ZERO,
            closing_day: None,
            payment_day: None,
        }
    }

    /// split of the debt into billed and unbilled parts
    pub fn with_itemization(mut self, statement_amount: Money, current_cycle_amount: Money) -> Self {
        self.statement_amount = statement_amount;
        self.current_cycle_amount = current_cycle_amount;
        self
    }

    /// set closing and payment days, rejecting values outside 1..=31
    pub fn with_cycle_days(mut self, closing_day: u32, payment_day: u32) -> Result<Self> {
        self.closing_day = Some(DayOfMonth::checked("closing_day", closing_day)?);
        self.payment_day = Some(DayOfMonth::checked("payment_day", payment_day)?);
        Ok(self)
    }

    /// both days present
    pub fn cycle_days(&self) -> Option<(DayOfMonth, DayOfMonth)> {
        Some((self.closing_day?, self.payment_day?))
    }

    /// statement plus current cycle
    pub fn itemized_debt(&self) -> Money {
        self.statement_amount + self.current_cycle_amount
    }

    /// reject negative amounts
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("credit_limit", self.credit_limit),
            ("total_debt", self.total_debt),
            ("statement_amount", self.statement_amount),
            ("current_cycle_amount", self.current_cycle_amount),
        ];
        for (field, amount) in fields {
            if amount.is_negative() {
                return Err(CalcError::NegativeAmount { field, amount });
            }
        }
        Ok(())
    }
}

/// transaction with a validated timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub id: RecordId,
    pub occurred_at: DateTime<Utc>,
    pub kind: RecordKind,
    pub amount: Money,
    pub description: Option<String>,
}

impl DatedRecord {
    pub fn new(id: RecordId, occurred_at: DateTime<Utc>, kind: RecordKind, amount: Money) -> Self {
        Self {
            id,
            occurred_at,
            kind,
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// transaction as delivered by the history service, timestamp still unparsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: RecordId,
    pub transaction_date: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub amount: Money,
    #[serde(default)]
    pub description: Option<String>,
}
