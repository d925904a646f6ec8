/// shared time - one injected clock drives cycle figures and bill status
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use credit_cycle_rs::calendar::local_today;
use credit_cycle_rs::{
    aggregate, bill_status, AccountKind, AccountSnapshot, CalculatorConfig, CreditAccountSnapshot,
    Currency, CycleCalculator, Money, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== shared time reference ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 10, 15, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let config = CalculatorConfig::lima();
    let tz = config.tz()?;
    let calculator = CycleCalculator::new(config);

    let card = CreditAccountSnapshot::new(Money::from_major(3_000), Money::from_major(1_200))
        .with_cycle_days(15, 5)?;
    let water_bill = NaiveDate::from_ymd_opt(2024, 6, 18).ok_or("bad date")?;

    let accounts = vec![
        AccountSnapshot::new(1, "Efectivo", AccountKind::Cash, Money::from_major(180)),
        AccountSnapshot::new(2, "Sueldo", AccountKind::Debit, Money::from_major(2_750)),
        AccountSnapshot::new(3, "Visa", AccountKind::Credit, Money::from_major(1_200)),
    ];
    let exposure = aggregate(&accounts);
    println!("liquidity: {}", exposure.liquidity.format_with(Currency::Pen));
    println!("debt: {}", exposure.debt.format_with(Currency::Pen));
    println!("net: {}\n", exposure.net_position().format_with(Currency::Pen));

    for _ in 0..3 {
        let today = local_today(&time, tz);
        let cycle = calculator.compute_now(&time, &card)?;
        println!("{today}");
        println!("  periodo: {}", cycle.period_range_label);
        println!("  pago: {}", cycle.next_payment_label);
        println!("  agua: {:?}", bill_status(water_bill, today, false));

        controller.advance(Duration::days(5));
    }

    Ok(())
}
