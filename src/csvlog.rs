// Append-only CSV log of every lighting record ever scraped.
//
// Rows are keyed by the (date, colors, details) triple; appending is
// the only mutation and duplicates of already-logged rows are dropped.
// Header casing from older files is tolerated on read.
use crate::model::ScheduleRecord;
use crate::storage;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const CSV_HEADERS: [&str; 3] = ["DATE", "COLORS", "DETAILS"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub added: usize,
    pub duplicates: usize,
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

/// Read the identity triples already present in the log. No lock; the
/// public entry points wrap this.
fn read_keys(path: &Path) -> Result<HashSet<(String, String, String)>> {
    let mut keys = HashSet::new();
    if !path.exists() {
        return Ok(keys);
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV log '{}'", path.display()))?;
    let headers = reader.headers()?.clone();
    let date_idx = header_index(&headers, "DATE");
    let colors_idx = header_index(&headers, "COLORS");
    let details_idx = header_index(&headers, "DETAILS");

    for row in reader.records() {
        let row = row?;
        let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("").to_string();
        keys.insert((field(date_idx), field(colors_idx), field(details_idx)));
    }
    Ok(keys)
}

/// The identity triples of all previously logged records.
pub fn load_existing(path: &Path) -> Result<HashSet<(String, String, String)>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    storage::with_lock(path, || read_keys(path))
}

/// The full accumulated record set, for feed regeneration. Rows whose
/// date does not parse are skipped with a warning.
pub fn load_records(path: &Path) -> Result<Vec<ScheduleRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    storage::with_lock(path, || {
        let mut records = Vec::new();
        for (date_text, colors, details) in read_keys(path)? {
            match NaiveDate::parse_from_str(&date_text, "%Y-%m-%d") {
                Ok(date) => records.push(ScheduleRecord::new(date, colors, details)),
                Err(_) => log::warn!("Skipping CSV row with unparseable date '{}'", date_text),
            }
        }
        Ok(records)
    })
}

/// Append the records not already present in the log, creating the
/// file (with headers) on first use. Returns added/duplicate counts.
pub fn append_records(path: &Path, records: &[ScheduleRecord]) -> Result<AppendOutcome> {
    storage::with_lock(path, || {
        let mut existing = read_keys(path)?;
        let needs_header = !path.exists() || fs::metadata(path)?.len() == 0;

        let mut fresh = Vec::new();
        let mut duplicates = 0;
        for record in records {
            let key = record.dedup_key();
            if existing.contains(&key) {
                duplicates += 1;
            } else {
                existing.insert(key);
                fresh.push(record);
            }
        }

        if fresh.is_empty() {
            log::info!("CSV unchanged: all {} record(s) already logged", records.len());
            return Ok(AppendOutcome {
                added: 0,
                duplicates,
            });
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open CSV log '{}' for append", path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(CSV_HEADERS)?;
        }
        for record in &fresh {
            writer.serialize(record)?;
        }
        writer.flush()?;

        log::info!(
            "CSV updated: {} new record(s) added to {}",
            fresh.len(),
            path.display()
        );
        if duplicates > 0 {
            log::info!("Skipped {} duplicate record(s)", duplicates);
        }

        Ok(AppendOutcome {
            added: fresh.len(),
            duplicates,
        })
    })
}
