// Resolves one textual date expression into concrete calendar dates.
//
// Three patterns are tried in strict priority order, first match wins:
//   1. span range:  "Sunday, February 1 - Sunday, February 8, 2026"
//   2. day range:   "Monday, March 15-17, 2026"
//   3. single date: "Friday, January 2, 2026"
//
// The weekday names are decorative: the source page does not keep them
// consistent with the printed dates, so they are captured but never
// checked against the resolved date.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Parsed intermediate form of a date expression. Day numbers are kept
/// raw so that calendar validity is checked per date at enumeration
/// time: an impossible day inside a range skips just that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateExpression {
    Single {
        month: String,
        day: u32,
        year: i32,
    },
    /// Contiguous day numbers within one month, e.g. "March 15-17".
    DayRange {
        month: String,
        start_day: u32,
        end_day: u32,
        year: i32,
    },
    /// Two full month/day endpoints sharing the trailing year.
    SpanRange {
        start_month: String,
        start_day: u32,
        end_month: String,
        end_day: u32,
        year: i32,
    },
}

static SPAN_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z]+),\s+([A-Za-z]+)\s+(\d{1,2})\s*-\s*([A-Za-z]+),\s+([A-Za-z]+)\s+(\d{1,2}),\s+(\d{4})$",
    )
    .unwrap()
});

static DAY_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+),\s+([A-Za-z]+)\s+(\d{1,2})\s*-\s*(\d{1,2}),\s+(\d{4})$").unwrap()
});

static SINGLE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+),\s+([A-Za-z]+)\s+(\d{1,2}),\s+(\d{4})$").unwrap());

fn match_span_range(text: &str) -> Option<DateExpression> {
    let caps = SPAN_RANGE.captures(text)?;
    Some(DateExpression::SpanRange {
        start_month: caps[2].to_string(),
        start_day: caps[3].parse().ok()?,
        end_month: caps[5].to_string(),
        end_day: caps[6].parse().ok()?,
        year: caps[7].parse().ok()?,
    })
}

fn match_day_range(text: &str) -> Option<DateExpression> {
    let caps = DAY_RANGE.captures(text)?;
    Some(DateExpression::DayRange {
        month: caps[2].to_string(),
        start_day: caps[3].parse().ok()?,
        end_day: caps[4].parse().ok()?,
        year: caps[5].parse().ok()?,
    })
}

fn match_single(text: &str) -> Option<DateExpression> {
    let caps = SINGLE_DATE.captures(text)?;
    Some(DateExpression::Single {
        month: caps[2].to_string(),
        day: caps[3].parse().ok()?,
        year: caps[4].parse().ok()?,
    })
}

/// Matchers in priority order. The first regex that matches decides the
/// expression shape; later matchers are not consulted even if the
/// chosen shape then enumerates no valid dates.
const MATCHERS: &[fn(&str) -> Option<DateExpression>] =
    &[match_span_range, match_day_range, match_single];

/// Build a date from a full month name, using chrono's month-name
/// parsing (case-insensitive). None for impossible combinations.
fn make_date(month: &str, day: u32, year: i32) -> Option<NaiveDate> {
    let text = format!("{} {}, {}", month, day, year);
    NaiveDate::parse_from_str(&text, "%B %d, %Y").ok()
}

/// Parse a date expression without enumerating it.
pub fn parse_expression(text: &str) -> Option<DateExpression> {
    let text = text.trim();
    MATCHERS.iter().find_map(|matcher| matcher(text))
}

impl DateExpression {
    /// Enumerate the concrete dates this expression covers, ascending.
    /// Reversed ranges and impossible endpoints yield nothing; an
    /// impossible day inside a day range is skipped with a warning and
    /// enumeration continues.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            DateExpression::Single { month, day, year } => {
                make_date(month, *day, *year).into_iter().collect()
            }
            DateExpression::DayRange {
                month,
                start_day,
                end_day,
                year,
            } => {
                if start_day > end_day {
                    return Vec::new();
                }
                let mut dates = Vec::new();
                for day in *start_day..=*end_day {
                    match make_date(month, day, *year) {
                        Some(date) => dates.push(date),
                        None => {
                            log::warn!("Skipping invalid calendar day '{} {}, {}'", month, day, year);
                        }
                    }
                }
                dates
            }
            DateExpression::SpanRange {
                start_month,
                start_day,
                end_month,
                end_day,
                year,
            } => {
                let (Some(start), Some(end)) = (
                    make_date(start_month, *start_day, *year),
                    make_date(end_month, *end_day, *year),
                ) else {
                    return Vec::new();
                };
                if start > end {
                    return Vec::new();
                }
                start.iter_days().take_while(|d| *d <= end).collect()
            }
        }
    }
}

/// Resolve a date expression to its ordered list of concrete dates.
/// Empty on any failure; malformed text is an expected input class and
/// never an error.
pub fn resolve(date_text: &str) -> Vec<NaiveDate> {
    match parse_expression(date_text) {
        Some(expr) => expr.dates(),
        None => Vec::new(),
    }
}
