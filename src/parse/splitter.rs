// Splits one raw schedule fragment into date, colors, and details.
//
// The delimiter is an em dash or en dash with optional surrounding
// whitespace. ASCII hyphens are deliberately not delimiters: they
// appear inside day ranges like "March 15-17".
use once_cell::sync::Lazy;
use regex::Regex;

const RECOGNITION_PREFIX: &str = "in recognition of ";

/// Notice text the source interleaves among the bold entries. Anything
/// containing these substrings is not a schedule entry.
const BOILERPLATE_MARKERS: &[&str] = &["City Hall", "Request"];

static DASH_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[–—]\s*").unwrap());

/// The three parts of a successfully split entry. `date_text` and
/// `colors` are non-empty; `details` may be the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryParts {
    pub date_text: String,
    pub colors: String,
    pub details: String,
}

/// True for fragments that are clearly not schedule entries: empty
/// text, or interleaved notice/boilerplate text. These are skipped
/// silently rather than reported as split failures.
pub fn is_boilerplate(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || BOILERPLATE_MARKERS.iter().any(|m| text.contains(m))
}

/// Split a fragment on dash delimiters into (date, colors, details).
/// None when the fragment lacks the two mandatory leading parts.
pub fn split(text: &str) -> Option<EntryParts> {
    let text = text.trim();
    let parts: Vec<&str> = DASH_DELIMITER.split(text).map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }

    let date_text = parts[0];
    let colors = parts[1];
    if date_text.is_empty() || colors.is_empty() {
        return None;
    }

    let details = if parts.len() > 2 {
        strip_recognition_prefix(&parts[2..].join(" – "))
    } else {
        String::new()
    };

    Some(EntryParts {
        date_text: date_text.to_string(),
        colors: colors.to_string(),
        details,
    })
}

/// Strip a leading "in recognition of " (case-insensitive), exactly
/// once.
fn strip_recognition_prefix(details: &str) -> String {
    match details.get(..RECOGNITION_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(RECOGNITION_PREFIX) => {
            details[RECOGNITION_PREFIX.len()..].to_string()
        }
        _ => details.to_string(),
    }
}
