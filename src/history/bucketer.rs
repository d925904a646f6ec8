use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, trace};

use crate::calendar::local_date;
use crate::config::{CalculatorConfig, LabelSet};
use crate::decimal::Money;
use crate::errors::Result;
use crate::format::{DateFormatter, DateStyle};
use crate::types::DatedRecord;

/// records sharing one calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket<'a> {
    pub date: NaiveDate,
    pub label: String,
    /// in input order
    pub entries: Vec<&'a DatedRecord>,
    /// inflows minus outflows; transfers do not count
    pub net_total: Money,
}

/// groups transaction history by calendar day
#[derive(Debug, Clone)]
pub struct DateBucketer {
    tz: Tz,
    labels: LabelSet,
}

impl DateBucketer {
    pub fn new(tz: Tz, labels: LabelSet) -> Self {
        Self { tz, labels }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self> {
        Ok(Self::new(config.tz()?, config.labels.clone()))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// calendar date a record belongs to, in the bucketer's timezone
    pub fn calendar_date(&self, record: &DatedRecord) -> NaiveDate {
        local_date(record.occurred_at, self.tz)
    }

    /// "Today", "Yesterday", or the weekday form
    pub fn relative_label(&self, date: NaiveDate, today: NaiveDate, formatter: &dyn DateFormatter) -> String {
        if date == today {
            self.labels.today.clone()
        } else if today.pred_opt() == Some(date) {
            self.labels.yesterday.clone()
        } else {
            formatter.format_date(date, DateStyle::Weekday)
        }
    }

    /// group records by day, most recent day first
    pub fn bucket<'a>(
        &self,
        records: &'a [DatedRecord],
        today: NaiveDate,
        formatter: &dyn DateFormatter,
    ) -> Vec<DailyBucket<'a>> {
        let mut days: BTreeMap<NaiveDate, (Vec<&'a DatedRecord>, Money)> = BTreeMap::new();

        for record in records {
            let (entries, net) = days.entry(self.calendar_date(record)).or_default();
            entries.push(record);
            *net += record.kind.net_effect(record.amount);
        }

        let buckets: Vec<DailyBucket<'a>> = days
            .into_iter()
            .rev()
            .map(|(date, (entries, net_total))| {
                trace!(%date, entries = entries.len(), %net_total, "day bucket");
                DailyBucket {
                    date,
                    label: self.relative_label(date, today, formatter),
                    entries,
                    net_total,
                }
            })
            .collect();

        debug!(records = records.len(), days = buckets.len(), tz = %self.tz.name(), "bucketed history");
        buckets
    }
}

impl Default for DateBucketer {
    fn default() -> Self {
        DateBucketer::new(Tz::UTC, LabelSet::english())
    }
}

/// bucket in UTC with english labels
pub fn bucket<'a>(
    records: &'a [DatedRecord],
    today: NaiveDate,
    formatter: &dyn DateFormatter,
) -> Vec<DailyBucket<'a>> {
    DateBucketer::default().bucket(records, today, formatter)
}
