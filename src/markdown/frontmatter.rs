//! YAML frontmatter parsing and normalization
//!
//! Header fields in problem notes are duck-typed: depending on which editor
//! or plugin last wrote the note, the same field may arrive as a number, a
//! string (possibly comma-separated), or a proper sequence. All of that
//! tolerance is concentrated here; callers get plain Rust values and never
//! inspect `serde_yaml::Value` themselves.

use std::collections::HashMap;

use chrono::NaiveDate;
use regex::{NoExpand, Regex};
use serde_yaml::Value;

/// Split YAML frontmatter from note content.
///
/// Returns the parsed header map and the body after the closing delimiter.
/// Content without a well-formed frontmatter block yields `None` and the
/// full text. The note is still readable, it just has no header fields.
pub fn split_frontmatter(content: &str) -> (Option<HashMap<String, Value>>, &str) {
    if !content.starts_with("---") {
        return (None, content);
    }

    // Find the closing ---
    if let Some(end_idx) = content[3..].find("\n---") {
        let yaml_content = &content[3..3 + end_idx];
        let rest = content[3 + end_idx + 4..].trim_start_matches(['\r', '\n']);

        if let Ok(header) = serde_yaml::from_str(yaml_content) {
            return (Some(header), rest);
        }
    }

    (None, content)
}

/// Read a field as a non-negative integer, tolerating numeric strings.
pub fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a field as text, tolerating bare numbers.
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize an integer-list field.
///
/// Accepts a scalar (`70`), a comma-separated string (`"50, 70, 80"`), or a
/// sequence (`[50, 70, 80]`); non-numeric entries are discarded.
pub fn as_u32_list(value: &Value) -> Vec<u32> {
    match value {
        Value::Number(_) => as_u32(value).into_iter().collect(),
        Value::String(s) => s.split(',').filter_map(|p| p.trim().parse().ok()).collect(),
        Value::Sequence(seq) => seq.iter().filter_map(as_u32).collect(),
        _ => Vec::new(),
    }
}

/// Normalize a string-list field with the same shape tolerance as
/// [`as_u32_list`].
pub fn as_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(seq) => seq.iter().filter_map(as_string).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect(),
        Value::Number(n) => vec![n.to_string()],
        _ => Vec::new(),
    }
}

/// Read a `YYYY-MM-DD` date field.
pub fn as_date(value: &Value) -> Option<NaiveDate> {
    as_string(value).and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Append an entry to an inline list field (`field: [a, b]`) in the
/// frontmatter, leaving the body untouched.
///
/// Notes come in three states and all are handled: the field already exists,
/// the frontmatter exists without the field, or the note has no frontmatter
/// at all.
pub fn append_list_entry(content: &str, field: &str, entry: &str) -> String {
    let field_re =
        Regex::new(&format!(r"(?s){}:\s*\[(.*?)\]", regex::escape(field))).unwrap();

    if content.starts_with("---") {
        if let Some(end_idx) = content[3..].find("\n---") {
            // Header keeps its leading newline so splices stay byte-stable.
            let header = &content[3..3 + end_idx];
            let rest = &content[3 + end_idx..];

            let new_header = if let Some(caps) = field_re.captures(header) {
                let existing = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                let replacement = if existing.is_empty() {
                    format!("{}: [{}]", field, entry)
                } else {
                    format!("{}: [{}, {}]", field, existing, entry)
                };
                field_re.replace(header, NoExpand(&replacement)).into_owned()
            } else {
                format!("{}\n{}: [{}]", header.trim_end(), field, entry)
            };

            return format!("---{}{}", new_header, rest);
        }
    }

    format!("---\n{}: [{}]\n---\n\n{}", field, entry, content)
}

/// Overwrite a scalar field (`field: value`) in the frontmatter.
///
/// Returns the content unchanged when the note has no frontmatter or the
/// field is absent: this keeps informational fields in sync, it does not
/// to introduce them.
pub fn set_scalar_field(content: &str, field: &str, value: &str) -> String {
    let field_re =
        Regex::new(&format!(r"(?m)^{}:[^\n]*$", regex::escape(field))).unwrap();

    if content.starts_with("---") {
        if let Some(end_idx) = content[3..].find("\n---") {
            let header = &content[3..3 + end_idx];
            if field_re.is_match(header) {
                let replacement = format!("{}: {}", field, value);
                let new_header = field_re.replace(header, NoExpand(&replacement));
                return format!("---{}{}", new_header, &content[3 + end_idx..]);
            }
        }
    }

    content.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(content: &str) -> HashMap<String, Value> {
        split_frontmatter(content).0.expect("frontmatter should parse")
    }

    #[test]
    fn test_split_frontmatter() {
        let content = "---\nnumber: 3\ntitle: \"Chain rule\"\n---\n\n# Body\n";
        let (fm, body) = split_frontmatter(content);

        let fm = fm.unwrap();
        assert_eq!(as_u32(&fm["number"]), Some(3));
        assert_eq!(as_string(&fm["title"]).as_deref(), Some("Chain rule"));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a heading\n";
        let (fm, body) = split_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\nnumber: 3\nno closing delimiter";
        let (fm, body) = split_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_number_as_string() {
        let fm = header("---\nnumber: \"12\"\n---\nbody");
        assert_eq!(as_u32(&fm["number"]), Some(12));
    }

    #[test]
    fn test_non_numeric_number() {
        let fm = header("---\nnumber: twelve\n---\nbody");
        assert_eq!(as_u32(&fm["number"]), None);
    }

    #[test]
    fn test_scores_as_sequence() {
        let fm = header("---\nunderstandings: [10, 20, 30]\n---\nbody");
        assert_eq!(as_u32_list(&fm["understandings"]), vec![10, 20, 30]);
    }

    #[test]
    fn test_scores_as_comma_separated_string() {
        let fm = header("---\nunderstandings: \"10, 20, 30\"\n---\nbody");
        assert_eq!(as_u32_list(&fm["understandings"]), vec![10, 20, 30]);
    }

    #[test]
    fn test_scores_as_scalar() {
        let fm = header("---\nunderstandings: 10\n---\nbody");
        assert_eq!(as_u32_list(&fm["understandings"]), vec![10]);
    }

    #[test]
    fn test_scores_discard_non_numeric() {
        let fm = header("---\nunderstandings: [10, high, 30]\n---\nbody");
        assert_eq!(as_u32_list(&fm["understandings"]), vec![10, 30]);
    }

    #[test]
    fn test_string_list_from_sequence() {
        let fm = header("---\ntimes: [\"00:05:30\", \"00:03:10\"]\n---\nbody");
        assert_eq!(as_string_list(&fm["times"]), vec!["00:05:30", "00:03:10"]);
    }

    #[test]
    fn test_date() {
        let fm = header("---\ncreated: 2026-01-15\n---\nbody");
        let date = as_date(&fm["created"]).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_append_to_existing_list() {
        let content = "---\nunderstandings: [50, 70]\n---\n\n# Body\n";
        let updated = append_list_entry(content, "understandings", "85");

        assert!(updated.contains("understandings: [50, 70, 85]"));
        assert!(updated.ends_with("# Body\n"));
    }

    #[test]
    fn test_append_to_empty_list() {
        let content = "---\nunderstandings: []\n---\nbody";
        let updated = append_list_entry(content, "understandings", "85");
        assert!(updated.contains("understandings: [85]"));
    }

    #[test]
    fn test_append_creates_missing_field() {
        let content = "---\nnumber: 3\n---\nbody";
        let updated = append_list_entry(content, "understandings", "85");

        let fm = header(&updated);
        assert_eq!(as_u32(&fm["number"]), Some(3));
        assert_eq!(as_u32_list(&fm["understandings"]), vec![85]);
    }

    #[test]
    fn test_append_creates_missing_frontmatter() {
        let content = "# Bare note\n";
        let updated = append_list_entry(content, "understandings", "85");

        let (fm, body) = split_frontmatter(&updated);
        assert_eq!(as_u32_list(&fm.unwrap()["understandings"]), vec![85]);
        assert!(body.starts_with("# Bare note"));
    }

    #[test]
    fn test_append_ignores_list_syntax_in_body() {
        let content = "---\nunderstandings: [10]\n---\nunderstandings: [99] in prose\n";
        let updated = append_list_entry(content, "understandings", "20");

        assert!(updated.contains("understandings: [10, 20]"));
        assert!(updated.contains("understandings: [99] in prose"));
    }

    #[test]
    fn test_set_scalar_field() {
        let content = "---\nnumber: 3\nreviewCount: 0\n---\nbody";
        let updated = set_scalar_field(content, "reviewCount", "4");

        let fm = header(&updated);
        assert_eq!(as_u32(&fm["reviewCount"]), Some(4));
        assert_eq!(as_u32(&fm["number"]), Some(3));
    }

    #[test]
    fn test_set_scalar_field_absent_is_noop() {
        let content = "---\nnumber: 3\n---\nbody";
        assert_eq!(set_scalar_field(content, "reviewCount", "4"), content);
    }
}
