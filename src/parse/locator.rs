// Finds the lighting schedule content block inside a fetched document.
//
// The page nests the schedule under a collapsible section:
//   <details><summary><h3>Lighting schedule</h3></summary><div>…</div></details>
// but the structure has drifted before, so location is an ordered chain
// of strategies and the first success wins:
//   1. a <summary> containing the heading phrase -> its next sibling,
//   2. the smallest element whose own text holds the phrase -> its (or
//      its parent's) next sibling,
//   3. plain text scan: everything after the phrase.
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const HEADING_PHRASE: &str = "lighting schedule";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)lighting\s+schedule").unwrap());

/// The located schedule content. `fragments` holds the typographically
/// distinguished entry candidates (bold spans, else child paragraphs);
/// it is empty for plain-text documents, where the parser falls back to
/// line segmentation of `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBlock {
    pub text: String,
    pub fragments: Vec<String>,
}

/// Locate the schedule block. None when the heading phrase is absent or
/// no content block follows it; the caller treats that as zero records.
pub fn locate(document: &str) -> Option<ScheduleBlock> {
    let html = Html::parse_document(document);

    locate_by_summary(&html)
        .or_else(|| locate_by_heading(&html))
        .map(block_from_element)
        .or_else(|| locate_in_plain_text(document))
}

/// Strategy 1: the summary/sibling pattern of the collapsible section.
fn locate_by_summary<'a>(html: &'a Html) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("summary").unwrap();
    html.select(&selector)
        .find(|summary| {
            element_text(summary).to_lowercase().contains(HEADING_PHRASE)
        })
        .and_then(next_sibling_element)
}

/// Strategy 2: the nearest element holding the phrase in its own text
/// nodes, then its next sibling, else its parent's next sibling.
fn locate_by_heading<'a>(html: &'a Html) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("*").unwrap();
    for element in html.select(&selector) {
        if !own_text_contains(&element, HEADING_PHRASE) {
            continue;
        }
        if let Some(sibling) = next_sibling_element(element) {
            return Some(sibling);
        }
        if let Some(parent) = parent_element(element)
            && let Some(sibling) = next_sibling_element(parent)
        {
            return Some(sibling);
        }
    }
    None
}

/// Strategy 3: no usable markup at all. Consume everything after the
/// heading phrase as the block text; segmentation is left to the
/// parser's line fallback.
fn locate_in_plain_text(document: &str) -> Option<ScheduleBlock> {
    let found = HEADING_RE.find(document)?;
    let text = document[found.end()..].trim();
    if text.is_empty() {
        return None;
    }
    Some(ScheduleBlock {
        text: text.to_string(),
        fragments: Vec::new(),
    })
}

fn block_from_element(content: ElementRef<'_>) -> ScheduleBlock {
    let bold = Selector::parse("b, strong").unwrap();
    let mut fragments: Vec<String> = content
        .select(&bold)
        .map(|el| normalize_whitespace(&element_text(&el)))
        .filter(|t| !t.is_empty())
        .collect();

    // No bold entries: fall back to the block's direct child elements
    // (paragraph-style markup without emphasis).
    if fragments.is_empty() {
        fragments = content
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| normalize_whitespace(&element_text(&el)))
            .filter(|t| !t.is_empty())
            .collect();
    }

    ScheduleBlock {
        text: normalize_whitespace(&element_text(&content)),
        fragments,
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn own_text_contains(element: &ElementRef<'_>, phrase: &str) -> bool {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .any(|text| text.text.to_lowercase().contains(phrase))
}

fn next_sibling_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut node = element.next_sibling();
    while let Some(sibling) = node {
        if let Some(found) = ElementRef::wrap(sibling) {
            return Some(found);
        }
        node = sibling.next_sibling();
    }
    None
}

fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sibling_structure() {
        let html = r#"
            <details>
              <summary><h3>Lighting schedule</h3></summary>
              <div>
                <p><b>Friday, January 2, 2026 – blue/red – in recognition of National Day of Haiti</b></p>
                <p><b>Saturday, January 3, 2026 – gold – in recognition of Something Else</b></p>
              </div>
            </details>
        "#;
        let block = locate(html).unwrap();
        assert_eq!(block.fragments.len(), 2);
        assert!(block.fragments[0].starts_with("Friday, January 2, 2026"));
    }

    #[test]
    fn test_heading_sibling_fallback() {
        let html = r#"
            <h3>Lighting schedule</h3>
            <div><b>Friday, January 2, 2026 – blue/red – in recognition of X</b></div>
        "#;
        let block = locate(html).unwrap();
        assert_eq!(block.fragments.len(), 1);
    }

    #[test]
    fn test_plain_text_fallback_has_no_fragments() {
        let text = "Intro text\nLighting schedule\nFriday, January 2, 2026 – blue/red – in recognition of X\n";
        let block = locate(text).unwrap();
        assert!(block.fragments.is_empty());
        assert!(block.text.contains("Friday, January 2, 2026"));
    }

    #[test]
    fn test_missing_heading_locates_nothing() {
        assert!(locate("<p>Office hours and directions</p>").is_none());
    }

    #[test]
    fn test_heading_with_no_following_content_locates_nothing() {
        assert!(locate("Some page\nLighting schedule").is_none());
    }

    #[test]
    fn test_block_without_bold_uses_child_elements() {
        let html = r#"
            <details>
              <summary>Lighting schedule</summary>
              <div>
                <p>Friday, January 2, 2026 – blue/red – in recognition of X</p>
                <p>Saturday, January 3, 2026 – gold</p>
              </div>
            </details>
        "#;
        let block = locate(html).unwrap();
        assert_eq!(block.fragments.len(), 2);
        assert!(block.fragments[1].contains("gold"));
    }
}
