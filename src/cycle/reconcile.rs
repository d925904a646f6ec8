use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::CreditAccountSnapshot;

/// agreement between total debt and its statement/current-cycle itemization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reconciliation {
    /// no itemization supplied
    Unitemized,
    /// itemization within tolerance of the total
    Consistent,
    /// itemization and total disagree; the total is still what gets displayed
    Divergent {
        total_debt: Money,
        itemized: Money,
        difference: Money,
    },
}

impl Reconciliation {
    pub fn is_divergent(&self) -> bool {
        matches!(self, Reconciliation::Divergent { .. })
    }
}

pub fn reconcile(snapshot: &CreditAccountSnapshot, tolerance: Money) -> Reconciliation {
    if snapshot.statement_amount.is_zero() && snapshot.current_cycle_amount.is_zero() {
        return Reconciliation::Unitemized;
    }

    let itemized = snapshot.itemized_debt();
    let difference = snapshot.total_debt - itemized;

    if difference.abs() <= tolerance {
        Reconciliation::Consistent
    } else {
        Reconciliation::Divergent {
            total_debt: snapshot.total_debt,
            itemized,
            difference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cents() -> Money {
        Money::from_decimal(dec!(0.01))
    }

    #[test]
    fn test_unitemized() {
        let snapshot = CreditAccountSnapshot::new(Money::from_major(1000), Money::from_major(250));
        assert_eq!(reconcile(&snapshot, cents()), Reconciliation::Unitemized);
    }

    #[test]
    fn test_consistent_within_tolerance() {
        let snapshot = CreditAccountSnapshot::new(Money::from_major(1000), Money::from_decimal(dec!(250.01)))
            .with_itemization(Money::from_major(200), Money::from_major(50));
        assert_eq!(reconcile(&snapshot, cents()), Reconciliation::Consistent);
    }

    #[test]
    fn test_divergent_beyond_tolerance() {
        let snapshot = CreditAccountSnapshot::new(Money::from_major(1000), Money::from_major(250))
            .with_itemization(Money::from_major(180), Money::from_major(50));
        let result = reconcile(&snapshot, cents());
        assert!(result.is_divergent());
        assert_eq!(
            result,
            Reconciliation::Divergent {
                total_debt: Money::from_major(250),
                itemized: Money::from_major(230),
                difference: Money::from_major(20),
            }
        );
    }
}
