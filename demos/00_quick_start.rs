/// quick start - cycle figures for one credit card
use chrono::NaiveDate;
use credit_cycle_rs::{compute_cycle, CreditAccountSnapshot, Locale, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let card = CreditAccountSnapshot::new(Money::from_major(1_000), Money::from_major(250))
        .with_cycle_days(15, 5)?;

    let today = NaiveDate::from_ymd_opt(2024, 6, 20).ok_or("bad date")?;
    let result = compute_cycle(today, &card, &Locale::English)?;

    println!("available: {}", result.available_credit);
    println!("utilization: {}%", result.utilization_pct.round_dp(2));
    println!("period: {}", result.period_range_label);
    println!("next payment: {}", result.next_payment_label);

    Ok(())
}
