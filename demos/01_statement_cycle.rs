/// statement cycle - year roll-over, short months, reconciliation and backend due dates
use chrono::NaiveDate;
use credit_cycle_rs::{
    BackendDueDate, CalculatorConfig, CreditAccountSnapshot, CycleCalculator, Currency, Locale, Money,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== statement cycle ===\n");

    let calculator = CycleCalculator::new(CalculatorConfig::lima());

    // closes on the 20th, pays on the 5th
    let card = CreditAccountSnapshot::new(Money::from_major(4_500), Money::from_major(1_320))
        .with_itemization(Money::from_major(900), Money::from_major(420))
        .with_cycle_days(20, 5)?;

    for (y, m, d) in [(2024, 1, 5), (2024, 1, 25), (2024, 12, 28)] {
        let today = NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date")?;
        let result = calculator.compute(today, &card, &Locale::Spanish)?;
        println!("today {today}");
        println!("  periodo: {}", result.period_range_label);
        println!("  pago: {}", result.next_payment_label);
        println!("  disponible: {}", result.available_credit.format_with(Currency::Pen));
    }

    // closing on the 31st lands on the last day of shorter months
    println!("\nclosing day 31:");
    let month_end = CreditAccountSnapshot::new(Money::from_major(2_000), Money::ZERO)
        .with_cycle_days(31, 15)?;
    for (y, m, d) in [(2024, 2, 10), (2024, 4, 10), (2023, 2, 10)] {
        let today = NaiveDate::from_ymd_opt(y, m, d).ok_or("bad date")?;
        let result = calculator.compute(today, &month_end, &Locale::English)?;
        println!("  {today}: {}", result.period_range_label);
    }

    // itemization that disagrees with the total is flagged, the total still wins
    println!("\nreconciliation:");
    let drifted = CreditAccountSnapshot::new(Money::from_major(4_500), Money::from_major(1_320))
        .with_itemization(Money::from_major(500), Money::from_major(420))
        .with_cycle_days(20, 5)?;
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("bad date")?;
    let result = calculator.compute(today, &drifted, &Locale::English)?;
    println!("  {:?}", result.reconciliation);
    println!("  utilization still from total debt: {}%", result.utilization_pct.round_dp(2));

    // a due date from the backend replaces the heuristic
    println!("\nbackend due date:");
    let due = NaiveDate::from_ymd_opt(2024, 7, 8).ok_or("bad date")?;
    let authoritative = CycleCalculator::new(CalculatorConfig::default()).with_resolver(BackendDueDate(due));
    let result = authoritative.compute(today, &card, &Locale::English)?;
    println!("  next payment: {}", result.next_payment_label);

    println!("\n{}", result.to_json_pretty());

    Ok(())
}
