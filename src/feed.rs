// Serializes the accumulated record set as a subscribable iCalendar
// feed: one all-day VEVENT per record.
use crate::config::Config;
use crate::model::ScheduleRecord;
use crate::storage;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use icalendar::{Calendar, Component, Event, EventLike};
use std::path::Path;

/// Shown when the source gives a date and colors but no occasion.
const EMPTY_DETAILS_PLACEHOLDER: &str = "No details provided";

/// Feed uids are a pure function of the date, so regenerating the feed
/// from the full accumulated record set keeps identifiers stable and
/// subscribed clients see updates rather than duplicates.
pub fn feed_uid(date: NaiveDate) -> String {
    format!("{}-cityhall@sf.gov", date.format("%Y-%m-%d"))
}

/// Build the calendar from the full accumulated record set. Records
/// are sorted by identity triple for deterministic output.
pub fn build_calendar(records: &[ScheduleRecord], config: &Config) -> Calendar {
    log::info!("Generating calendar with {} event(s)", records.len());

    let mut sorted: Vec<&ScheduleRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.dedup_key());

    let mut calendar = Calendar::new();
    calendar.name(&config.calendar_name);
    calendar.description(&config.calendar_description);
    calendar.timezone(config.calendar_timezone.as_str());

    for record in sorted {
        let details = if record.details.is_empty() {
            EMPTY_DETAILS_PLACEHOLDER
        } else {
            record.details.as_str()
        };

        let mut event = Event::new();
        event.uid(&feed_uid(record.date));
        event.summary(&format!("CHC: {}", record.colors));
        event.all_day(record.date);
        event.description(details);
        event.location(&config.location);
        event.add_property("URL", &config.url);
        event.timestamp(Utc::now());
        calendar.push(event);
    }

    calendar
}

/// Write the serialized feed atomically, under the sidecar lock.
pub fn save(calendar: &Calendar, path: &Path) -> Result<()> {
    storage::with_lock(path, || storage::atomic_write(path, calendar.to_string()))?;
    log::info!("Calendar saved to {}", path.display());
    Ok(())
}
