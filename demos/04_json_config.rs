/// json config - load configuration and account snapshots from json
use chrono::NaiveDate;
use credit_cycle_rs::{
    budget_progress, goal_progress, CalculatorConfig, CreditAccountSnapshot, CycleCalculator, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_json(r#"{
        "timezone": "America/Lima",
        "locale": "spanish",
        "labels": { "today": "Hoy", "yesterday": "Ayer", "unavailable": "--" },
        "reconciliation_tolerance": "0.05"
    }"#)?;

    let card: CreditAccountSnapshot = serde_json::from_str(r#"{
        "creditLimit": 2500,
        "totalDebt": "1980.40",
        "statementAmount": "1500.00",
        "currentCycleAmount": "480.40",
        "closingDate": 25,
        "paymentDate": 10
    }"#)?;
    card.validate()?;

    let locale = config.locale;
    let calculator = CycleCalculator::new(config);
    let today = NaiveDate::from_ymd_opt(2024, 2, 27).ok_or("bad date")?;
    let result = calculator.compute(today, &card, &locale)?;

    println!("{}", result.to_json_pretty());

    // a card without cycle days still reports exposure
    let bare: CreditAccountSnapshot = serde_json::from_str(r#"{ "creditLimit": 800, "totalDebt": 0 }"#)?;
    let result = calculator.compute(today, &bare, &locale)?;
    println!("{} / {}", result.period_range_label, result.next_payment_label);

    let groceries = budget_progress(Money::from_major(600), Money::from_major(455));
    println!("groceries: {:?} ({}%)", groceries.health, groceries.bar_width_pct);

    let trip = goal_progress(Rate::from_decimal(rust_decimal_macros::dec!(0.35)));
    println!("trip fund: {trip}%");

    Ok(())
}
