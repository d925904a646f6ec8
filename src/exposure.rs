use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::types::{AccountKind, AccountSnapshot};

/// household exposure across active accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureTotals {
    /// cash + debit balances
    pub liquidity: Money,
    /// credit balances
    pub debt: Money,
}

impl ExposureTotals {
    pub fn net_position(&self) -> Money {
        self.liquidity - self.debt
    }
}

/// sum balances of active accounts into liquidity and debt
pub fn aggregate<'a, I>(accounts: I) -> ExposureTotals
where
    I: IntoIterator<Item = &'a AccountSnapshot>,
{
    let totals = accounts
        .into_iter()
        .filter(|a| a.is_active)
        .fold(ExposureTotals::default(), |mut totals, account| {
            match account.kind {
                AccountKind::Cash | AccountKind::Debit => totals.liquidity += account.balance,
                AccountKind::Credit => totals.debt += account.balance,
            }
            totals
        });

    debug!(liquidity = %totals.liquidity, debt = %totals.debt, "aggregated exposure");
    totals
}

/// split into liquid (cash, debit) and credit accounts, keeping order
pub fn partition(accounts: &[AccountSnapshot]) -> (Vec<&AccountSnapshot>, Vec<&AccountSnapshot>) {
    accounts.iter().partition(|a| a.kind.is_liquid())
}
