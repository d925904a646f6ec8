/// daily history - raw backend records bucketed by day in the user's timezone
use chrono::NaiveDate;
use credit_cycle_rs::{
    CalculatorConfig, Currency, DateBucketer, DatedRecord, ListFilter, Locale, RawRecord, RecordKind,
};
use credit_cycle_rs::filter::apply;

const HISTORY: &str = r#"[
    { "id": 1, "transactionDate": "2024-03-10T08:15", "type": "GASTO", "amount": "12.50", "description": "Desayuno" },
    { "id": 2, "transactionDate": "2024-03-09T21:40", "type": "GASTO", "amount": "45.00", "description": "Cena" },
    { "id": 3, "transactionDate": "2024-03-09T09:00", "type": "INGRESO", "amount": "150.00", "description": "Freelance" },
    { "id": 4, "transactionDate": "2024-03-09T10:00", "type": "TRANSFERENCIA", "amount": "300.00", "description": "A ahorros" },
    { "id": 5, "transactionDate": "2024-03-07T13:05:00-05:00", "type": "GASTO", "amount": "18.90", "description": "Menu" }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== daily history ===\n");

    let config = CalculatorConfig::lima();
    let tz = config.tz()?;

    let raw: Vec<RawRecord> = serde_json::from_str(HISTORY)?;
    let records = raw
        .into_iter()
        .map(|r| DatedRecord::from_raw(r, tz))
        .collect::<Result<Vec<_>, _>>()?;

    let bucketer = DateBucketer::from_config(&config)?;
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).ok_or("bad date")?;

    for day in bucketer.bucket(&records, today, &Locale::Spanish) {
        println!("{} ({})", day.label, day.net_total.format_with(Currency::Pen));
        for entry in &day.entries {
            println!(
                "  {:?} {} {}",
                entry.kind,
                entry.amount.format_with(Currency::Pen),
                entry.description.as_deref().unwrap_or("")
            );
        }
    }

    println!("\nonly expenses:");
    for entry in apply(&records, &ListFilter::ByKind(RecordKind::Outflow)) {
        println!("  #{} {}", entry.id, entry.amount);
    }

    Ok(())
}
