// Schedule parsing pipeline: locate the block, split each fragment,
// resolve its date expression, emit one record per covered date.
//
// A bad fragment never aborts the run. Failures degrade granularity
// (skip one date -> skip one fragment -> empty list) and are reported
// through the `log` facade; zero records is a valid outcome, not an
// error.
pub mod locator;
pub mod resolver;
pub mod splitter;

use crate::model::ScheduleRecord;

/// Parse a fetched document into dated lighting records. Pure function
/// of its input; source fragment order is preserved, and a multi-day
/// fragment expands in ascending date order.
pub fn parse_schedule(document: &str) -> Vec<ScheduleRecord> {
    let Some(block) = locator::locate(document) else {
        log::warn!("Could not find a lighting schedule section in the document");
        return Vec::new();
    };

    let fragments = fragment_candidates(&block);
    log::info!("Found {} schedule fragment(s)", fragments.len());

    let mut records = Vec::new();
    for fragment in &fragments {
        if splitter::is_boilerplate(fragment) {
            log::debug!("Skipping notice text: {}", truncate(fragment, 100));
            continue;
        }

        let Some(parts) = splitter::split(fragment) else {
            log::warn!("Could not split entry text: {}", truncate(fragment, 100));
            continue;
        };

        let dates = resolver::resolve(&parts.date_text);
        if dates.is_empty() {
            log::warn!("Could not resolve date expression '{}'", parts.date_text);
            continue;
        }

        for date in dates {
            records.push(ScheduleRecord::new(date, &parts.colors, &parts.details));
        }
    }

    if records.is_empty() {
        // Structure drift aid: show what the locator actually produced.
        for (i, fragment) in fragments.iter().take(3).enumerate() {
            log::debug!("Fragment {}: {}", i, truncate(fragment, 200));
        }
    }

    records
}

/// Entry candidates for one located block: the typographically
/// distinguished fragments when the markup has them, otherwise the
/// block text segmented on line boundaries.
fn fragment_candidates(block: &locator::ScheduleBlock) -> Vec<String> {
    if !block.fragments.is_empty() {
        return block.fragments.clone();
    }
    block
        .text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Char-boundary-safe truncation for logged fragment text.
fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 100), "short");
    }
}
