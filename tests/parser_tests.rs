//! End-to-end tests for the schedule parsing pipeline on synthetic
//! documents shaped like the source page.
use chrono::NaiveDate;
use lightcal::parse::parse_schedule;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A document in the summary/sibling shape with one bold span per entry.
fn document_with_entries(entries: &[&str]) -> String {
    let bolded: String = entries
        .iter()
        .map(|entry| format!("<p><b>{}</b></p>", entry))
        .collect();
    format!(
        "<html><body><details><summary><h3>Lighting schedule</h3></summary>\
         <div>{}</div></details></body></html>",
        bolded
    )
}

#[test]
fn test_full_entry_yields_one_record_with_stripped_details() {
    let doc = document_with_entries(&[
        "Friday, January 2, 2026 – blue/red – in recognition of National Day of Haiti",
    ]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, d(2026, 1, 2));
    assert_eq!(records[0].colors, "blue/red");
    assert_eq!(records[0].details, "National Day of Haiti");
}

#[test]
fn test_two_part_entry_has_empty_details() {
    let doc = document_with_entries(&["Friday, January 2, 2026 – blue/red"]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details, "");
}

#[test]
fn test_span_range_expands_to_eight_records() {
    let doc =
        document_with_entries(&["Sunday, February 1 - Sunday, February 8, 2026 – green"]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 8);
    assert_eq!(records[0].date, d(2026, 2, 1));
    assert_eq!(records[7].date, d(2026, 2, 8));
    assert!(records.iter().all(|r| r.colors == "green"));
}

#[test]
fn test_day_range_expands_to_three_records() {
    let doc = document_with_entries(&["Monday, March 15-17, 2026 – gold"]);
    let records = parse_schedule(&doc);
    assert_eq!(
        records.iter().map(|r| r.date).collect::<Vec<_>>(),
        vec![d(2026, 3, 15), d(2026, 3, 16), d(2026, 3, 17)]
    );
}

#[test]
fn test_boilerplate_fragments_are_excluded() {
    let doc = document_with_entries(&[
        "Friday, January 2, 2026 – blue/red – in recognition of X",
        "City Hall is illuminated nightly from dusk",
        "Request a lighting through the sponsorship form",
        // Structurally valid but contains a marker substring.
        "Saturday, January 3, 2026 – gold – in recognition of a City Hall gala",
        "Sunday, January 4, 2026 – purple – in recognition of Y",
    ]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, d(2026, 1, 2));
    assert_eq!(records[1].date, d(2026, 1, 4));
}

#[test]
fn test_unparseable_date_skips_only_that_fragment() {
    let doc = document_with_entries(&[
        "Friday, January 2, 2026 – blue/red – in recognition of X",
        "sometime in spring – rainbow – in recognition of Y",
        "Saturday, January 3, 2026 – gold – in recognition of Z",
    ]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].details, "Z");
}

#[test]
fn test_fragment_without_delimiters_skips_only_that_fragment() {
    let doc = document_with_entries(&[
        "no delimiters at all",
        "Friday, January 2, 2026 – blue/red",
    ]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 1);
}

#[test]
fn test_round_trip_preserves_source_order() {
    let entries = [
        "Wednesday, March 4, 2026 – teal – in recognition of A",
        "Monday, January 5, 2026 – red – in recognition of B",
        "Friday, February 6, 2026 – white – in recognition of C",
    ];
    let records = parse_schedule(&document_with_entries(&entries));
    assert_eq!(records.len(), 3);
    // Source order, not date order.
    assert_eq!(records[0].details, "A");
    assert_eq!(records[1].details, "B");
    assert_eq!(records[2].details, "C");
}

#[test]
fn test_parse_is_idempotent() {
    let doc = document_with_entries(&[
        "Friday, January 2, 2026 – blue/red – in recognition of X",
        "Monday, March 15-17, 2026 – gold – in recognition of Y",
    ]);
    assert_eq!(parse_schedule(&doc), parse_schedule(&doc));
}

#[test]
fn test_missing_schedule_section_yields_empty() {
    let records = parse_schedule("<html><body><p>Visiting hours</p></body></html>");
    assert!(records.is_empty());
}

#[test]
fn test_plain_text_document_segments_by_lines() {
    let doc = "Lighting schedule\n\
               Friday, January 2, 2026 – blue/red – in recognition of X\n\
               Saturday, January 3, 2026 – gold\n";
    let records = parse_schedule(doc);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].colors, "gold");
}

#[test]
fn test_reversed_span_range_yields_nothing_for_that_fragment() {
    let doc = document_with_entries(&[
        "Sunday, February 8 - Sunday, February 1, 2026 – green",
        "Friday, January 2, 2026 – blue/red",
    ]);
    let records = parse_schedule(&doc);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, d(2026, 1, 2));
}
