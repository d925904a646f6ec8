use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::calendar::local_today;
use crate::config::CalculatorConfig;
use crate::cycle::due_date::{ClosingDayHeuristic, DueDateResolver};
use crate::cycle::period::StatementPeriod;
use crate::cycle::reconcile::{reconcile, Reconciliation};
use crate::cycle::CycleResult;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::format::{DateFormatter, DateStyle};
use crate::progress::UtilizationBand;
use crate::types::CreditAccountSnapshot;

/// remaining credit, never below zero
pub fn available_credit(credit_limit: Money, total_debt: Money) -> Money {
    (credit_limit - total_debt).max(Money::ZERO)
}

/// debt as a percentage of the limit, clamped to 0..=100; a zero limit is 0%.
/// not rounded, callers round for display
pub fn utilization_pct(credit_limit: Money, total_debt: Money) -> Decimal {
    if !credit_limit.is_positive() || !total_debt.is_positive() {
        return Decimal::ZERO;
    }
    if total_debt >= credit_limit {
        return dec!(100);
    }
    Rate::ratio(total_debt, credit_limit)
        .map(|r| r.as_percentage())
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, dec!(100))
}

/// calculator for credit statement cycles
pub struct CycleCalculator<R = ClosingDayHeuristic> {
    config: CalculatorConfig,
    resolver: R,
}

impl CycleCalculator<ClosingDayHeuristic> {
    /// create calculator with the closing-day payment heuristic
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            resolver: ClosingDayHeuristic,
        }
    }
}

impl Default for CycleCalculator<ClosingDayHeuristic> {
    fn default() -> Self {
        CycleCalculator::new(CalculatorConfig::default())
    }
}

impl<R: DueDateResolver> CycleCalculator<R> {
    /// swap the due date strategy
    pub fn with_resolver<S: DueDateResolver>(self, resolver: S) -> CycleCalculator<S> {
        CycleCalculator {
            config: self.config,
            resolver,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// compute cycle and exposure figures for `today`
    pub fn compute(
        &self,
        today: NaiveDate,
        snapshot: &CreditAccountSnapshot,
        formatter: &dyn DateFormatter,
    ) -> Result<CycleResult> {
        let available = available_credit(snapshot.credit_limit, snapshot.total_debt);
        let utilization = utilization_pct(snapshot.credit_limit, snapshot.total_debt);

        let reconciliation = reconcile(snapshot, self.config.reconciliation_tolerance);
        if let Reconciliation::Divergent { total_debt, itemized, difference } = reconciliation {
            warn!(
                %total_debt,
                %itemized,
                %difference,
                "credit debt itemization does not match total debt"
            );
        }

        let unavailable = &self.config.labels.unavailable;
        let (period, next_payment) = match snapshot.cycle_days() {
            Some((closing_day, payment_day)) => {
                let period = StatementPeriod::containing(today, closing_day)?;
                let due = self.resolver.next_due_date(today, closing_day, payment_day)?;
                (Some(period), Some(due))
            }
            None => {
                debug!("closing or payment day missing, cycle dates unavailable");
                (None, None)
            }
        };

        let period_range_label = period
            .map(|p| p.label(formatter))
            .unwrap_or_else(|| unavailable.clone());
        let next_payment_label = next_payment
            .map(|d| formatter.format_date(d, DateStyle::Long))
            .unwrap_or_else(|| unavailable.clone());

        debug!(
            %today,
            %available,
            %utilization,
            period = %period_range_label,
            next_payment = %next_payment_label,
            "computed credit cycle"
        );

        Ok(CycleResult {
            available_credit: available,
            utilization_pct: utilization,
            utilization_band: UtilizationBand::from_percentage(utilization),
            period,
            next_payment,
            period_range_label,
            next_payment_label,
            reconciliation,
        })
    }

    /// compute using the injected clock, configured timezone and locale
    pub fn compute_now(
        &self,
        time_provider: &SafeTimeProvider,
        snapshot: &CreditAccountSnapshot,
    ) -> Result<CycleResult> {
        let today = local_today(time_provider, self.config.tz()?);
        self.compute(today, snapshot, &self.config.locale)
    }
}

/// compute with default configuration and the closing-day heuristic
pub fn compute_cycle(
    today: NaiveDate,
    snapshot: &CreditAccountSnapshot,
    formatter: &dyn DateFormatter,
) -> Result<CycleResult> {
    CycleCalculator::new(CalculatorConfig::default()).compute(today, snapshot, formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::due_date::BackendDueDate;
    use crate::format::Locale;
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn iso(d: NaiveDate, _style: DateStyle) -> String {
        d.format("%Y-%m-%d").to_string()
    }

    fn card(limit: i64, debt: i64) -> CreditAccountSnapshot {
        CreditAccountSnapshot::new(Money::from_major(limit), Money::from_major(debt))
    }

    #[test]
    fn test_scenario_mid_cycle() {
        let snapshot = card(1000, 250).with_cycle_days(15, 5).unwrap();
        let result = compute_cycle(date(2024, 6, 20), &snapshot, &iso).unwrap();

        assert_eq!(result.available_credit, Money::from_major(750));
        assert_eq!(result.utilization_pct, dec!(25));
        assert_eq!(result.utilization_band, UtilizationBand::Healthy);
        assert_eq!(
            result.period,
            Some(StatementPeriod { start: date(2024, 6, 16), end: date(2024, 7, 15) })
        );
        assert_eq!(result.period_range_label, "2024-06-16 - 2024-07-15");
        // closing-day heuristic, not a statement-backed due date
        assert_eq!(result.next_payment, Some(date(2024, 7, 5)));
        assert_eq!(result.next_payment_label, "2024-07-05");
        assert_eq!(result.reconciliation, Reconciliation::Unitemized);
    }

    #[test]
    fn test_exposure_bounds() {
        for (limit, debt) in [(0, 0), (0, 50), (1000, 0), (1000, 999), (1000, 1000), (1000, 4000), (3, 1)] {
            let snapshot = card(limit, debt);
            let result = compute_cycle(date(2024, 1, 1), &snapshot, &Locale::English).unwrap();

            let expected = Money::from_major((limit - debt).max(0));
            assert_eq!(result.available_credit, expected);
            assert!(result.utilization_pct >= Decimal::ZERO);
            assert!(result.utilization_pct <= dec!(100));
        }
    }

    #[test]
    fn test_over_limit_caps_at_100() {
        let result = compute_cycle(date(2024, 1, 1), &card(1000, 1500), &Locale::English).unwrap();
        assert_eq!(result.available_credit, Money::ZERO);
        assert_eq!(result.utilization_pct, dec!(100));
        assert_eq!(result.utilization_band, UtilizationBand::Danger);
    }

    #[test]
    fn test_zero_limit_is_zero_utilization() {
        let result = compute_cycle(date(2024, 1, 1), &card(0, 300), &Locale::English).unwrap();
        assert_eq!(result.utilization_pct, Decimal::ZERO);
        assert_eq!(result.available_credit, Money::ZERO);
    }

    #[test]
    fn test_fractional_utilization_is_unrounded() {
        let result = compute_cycle(date(2024, 1, 1), &card(3, 1), &Locale::English).unwrap();
        assert!(result.utilization_pct > dec!(33.33));
        assert!(result.utilization_pct < dec!(33.34));
        assert_eq!(result.utilization_pct.round_dp(2), dec!(33.33));
    }

    #[test]
    fn test_extreme_debt_caps_without_overflow() {
        let huge = Money::from_decimal(Decimal::from_i128_with_scale(10_i128.pow(27), 0));
        let snapshot = CreditAccountSnapshot::new(Money::ONE, huge);
        let result = compute_cycle(date(2024, 1, 1), &snapshot, &Locale::English).unwrap();

        assert_eq!(result.utilization_pct, dec!(100));
        assert_eq!(result.utilization_band, UtilizationBand::Danger);
        assert_eq!(result.available_credit, Money::ZERO);

        let tiny_limit = Money::from_decimal(dec!(0.00000001));
        assert_eq!(utilization_pct(tiny_limit, huge), dec!(100));
        assert_eq!(utilization_pct(Money::ONE, -huge), Decimal::ZERO);
    }

    #[test]
    fn test_band_uses_unrounded_percentage() {
        let limit = Money::from_major(1000);
        let cases = [
            (dec!(900.04), UtilizationBand::Danger),
            (dec!(900), UtilizationBand::Warning),
            (dec!(500.04), UtilizationBand::Warning),
            (dec!(500), UtilizationBand::Healthy),
        ];
        for (debt, band) in cases {
            let snapshot = CreditAccountSnapshot::new(limit, Money::from_decimal(debt));
            let result = compute_cycle(date(2024, 1, 1), &snapshot, &Locale::English).unwrap();
            assert_eq!(result.utilization_band, band, "debt {debt}");
        }
    }

    #[test]
    fn test_missing_days_degrade_to_placeholder() {
        let mut only_closing = card(1000, 100);
        only_closing.closing_day = Some(crate::types::DayOfMonth::new(10).unwrap());

        for snapshot in [card(1000, 100), only_closing] {
            let result = compute_cycle(date(2024, 6, 20), &snapshot, &Locale::English).unwrap();
            assert_eq!(result.period_range_label, "--");
            assert_eq!(result.next_payment_label, "--");
            assert_eq!(result.period, None);
            assert_eq!(result.next_payment, None);
            assert_eq!(result.available_credit, Money::from_major(900));
        }
    }

    #[test]
    fn test_year_boundary_period() {
        let snapshot = card(500, 0).with_cycle_days(20, 10).unwrap();
        let result = compute_cycle(date(2024, 1, 5), &snapshot, &iso).unwrap();
        assert_eq!(result.period_range_label, "2023-12-21 - 2024-01-20");
        assert_eq!(result.next_payment, Some(date(2024, 2, 10)));
    }

    #[test]
    fn test_divergent_itemization_is_flagged_but_total_wins() {
        let snapshot = card(1000, 400)
            .with_itemization(Money::from_major(100), Money::from_major(100))
            .with_cycle_days(15, 5)
            .unwrap();
        let result = compute_cycle(date(2024, 6, 20), &snapshot, &iso).unwrap();

        assert!(result.reconciliation.is_divergent());
        assert_eq!(result.available_credit, Money::from_major(600));
        assert_eq!(result.utilization_pct, dec!(40));
    }

    #[test]
    fn test_backend_due_date_replaces_heuristic() {
        let snapshot = card(1000, 250).with_cycle_days(15, 5).unwrap();
        let calculator = CycleCalculator::new(CalculatorConfig::default())
            .with_resolver(BackendDueDate(date(2024, 7, 9)));
        let result = calculator.compute(date(2024, 6, 20), &snapshot, &iso).unwrap();
        assert_eq!(result.next_payment, Some(date(2024, 7, 9)));
    }

    #[test]
    fn test_spanish_labels() {
        let snapshot = card(1000, 250).with_cycle_days(15, 5).unwrap();
        let calculator = CycleCalculator::new(CalculatorConfig::lima());
        let result = calculator.compute(date(2024, 6, 20), &snapshot, &Locale::Spanish).unwrap();
        assert_eq!(result.period_range_label, "16 jun - 15 jul");
        assert_eq!(result.next_payment_label, "5 de julio de 2024");
    }

    #[test]
    fn test_compute_now_uses_configured_timezone() {
        let snapshot = card(1000, 250).with_cycle_days(15, 5).unwrap();
        let calculator = CycleCalculator::new(CalculatorConfig::lima());

        // 03:00 UTC on the 16th is still the 15th in Lima, the closing day
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 16, 3, 0, 0).unwrap()
        ));
        let result = calculator.compute_now(&time, &snapshot).unwrap();
        assert_eq!(
            result.period,
            Some(StatementPeriod { start: date(2024, 5, 16), end: date(2024, 6, 15) })
        );

        // a day later the next cycle is open
        let control = time.test_control().unwrap();
        control.advance(Duration::days(1));
        let result = calculator.compute_now(&time, &snapshot).unwrap();
        assert_eq!(
            result.period,
            Some(StatementPeriod { start: date(2024, 6, 16), end: date(2024, 7, 15) })
        );
    }

    #[test]
    fn test_result_serializes() {
        let snapshot = card(1000, 250).with_cycle_days(15, 5).unwrap();
        let result = compute_cycle(date(2024, 6, 20), &snapshot, &iso).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json_pretty()).unwrap();

        assert_eq!(json["available_credit"], "750");
        assert_eq!(json["next_payment"], "2024-07-05");
        assert_eq!(json["reconciliation"]["status"], "unitemized");
        assert_eq!(json["utilization_band"], "healthy");
    }
}
