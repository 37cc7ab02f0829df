// One calendar-date occurrence of the lighting schedule.
use chrono::NaiveDate;
use serde::Serialize;

/// A single dated lighting entry. A multi-day source entry expands into
/// one record per covered date, all sharing the same colors/details.
/// Serializes in the CSV log's column order and casing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ScheduleRecord {
    pub date: NaiveDate,
    /// Lighting colors/pattern for that date, e.g. "blue/red".
    pub colors: String,
    /// The occasion being commemorated; empty when the source omits it.
    pub details: String,
}

impl ScheduleRecord {
    pub fn new(date: NaiveDate, colors: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            date,
            colors: colors.into(),
            details: details.into(),
        }
    }

    /// Identity triple used for deduplication against the append log.
    /// A record is identified by (ISO date, colors, details), not by
    /// date alone: the same date may repeat with different colors.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.date.format("%Y-%m-%d").to_string(),
            self.colors.clone(),
            self.details.clone(),
        )
    }
}
