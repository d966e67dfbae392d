//! Review checklist extraction
//!
//! A note body carries its review history as markdown task items whose label
//! mentions "review". The checked count IS the review counter: it is derived
//! from the body on every scan, never read from a stored field, so it always
//! reflects the current checklist state.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

const REVIEW_KEYWORD: &str = "review";

/// Extract all checklist items from a markdown body as (label, checked) pairs.
pub fn extract_checklist(body: &str) -> Vec<(String, bool)> {
    let parser = Parser::new_ext(body, Options::empty());
    let mut items = Vec::new();
    let mut in_item = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Item) => {
                in_item = true;
                text.clear();
            }
            Event::End(TagEnd::Item) => {
                if let Some(item) = parse_checklist_item(text.trim()) {
                    items.push(item);
                }
                in_item = false;
            }
            Event::Text(t) | Event::Code(t) if in_item => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_item => text.push(' '),
            _ => {}
        }
    }

    items
}

/// Parse a checklist item pattern: "[ ]" or "[x]" at the start
fn parse_checklist_item(text: &str) -> Option<(String, bool)> {
    if let Some(rest) = text.strip_prefix("[ ] ") {
        Some((rest.to_string(), false))
    } else if let Some(rest) = text.strip_prefix("[x] ").or_else(|| text.strip_prefix("[X] ")) {
        Some((rest.to_string(), true))
    } else {
        None
    }
}

fn is_review_label(label: &str) -> bool {
    label.to_lowercase().contains(REVIEW_KEYWORD)
}

/// Count checked review items in a note body, i.e. the derived review counter.
pub fn count_checked_reviews(body: &str) -> u32 {
    extract_checklist(body)
        .iter()
        .filter(|(label, checked)| *checked && is_review_label(label))
        .count() as u32
}

/// Rewrite the first unchecked review item in the note as checked.
///
/// Returns the updated content, or `None` when the note has no unchecked
/// review item left to flip.
pub fn check_next_review(content: &str) -> Option<String> {
    let unchecked_re = Regex::new(r"^\s*[-*]\s\[ \]\s").unwrap();

    let mut lines: Vec<String> = content.lines().map(String::from).collect();
    let target = lines
        .iter()
        .position(|line| unchecked_re.is_match(line) && is_review_label(line))?;

    lines[target] = lines[target].replacen("[ ]", "[x]", 1);

    let mut updated = lines.join("\n");
    if content.ends_with('\n') {
        updated.push('\n');
    }
    Some(updated)
}
