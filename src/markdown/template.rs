//! Problem note template
//!
//! New problems are materialized as markdown notes with a full frontmatter
//! block and a ten-step review checklist. Checklist labels must contain
//! "review" so the derived counter picks them up.

use chrono::NaiveDate;

/// Number of review passes a problem note tracks.
pub const REVIEW_STEPS: usize = 10;

/// Focus note appended to each review step's label.
const STEP_NOTES: [&str; REVIEW_STEPS] = [
    "first pass",
    "accuracy",
    "speed",
    "variations",
    "explain it aloud",
    "from memory",
    "edge cases",
    "timed run",
    "teach it",
    "mastery check",
];

/// Render a new problem note with frontmatter and body skeleton.
pub fn problem_note(
    subject: &str,
    chapter: u32,
    number: u32,
    title: &str,
    difficulty: u8,
    created: NaiveDate,
) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("number: {}\n", number));
    output.push_str(&format!("chapter: {}\n", chapter));
    output.push_str(&format!("title: \"{}\"\n", escape_yaml_string(title)));
    output.push_str(&format!("subject: \"{}\"\n", escape_yaml_string(subject)));
    output.push_str(&format!("difficulty: {}\n", difficulty));
    output.push_str("reviewCount: 0\n");
    output.push_str("times: []\n");
    output.push_str("understandings: []\n");
    output.push_str(&format!("created: {}\n", created.format("%Y-%m-%d")));
    output.push_str(&format!(
        "tags: [problem, \"{}\", chapter-{}]\n",
        escape_yaml_string(subject),
        chapter
    ));
    output.push_str("---\n\n");

    output.push_str(&format!("# {}. {}\n\n", number, title));
    output.push_str(&format!(
        "> Source: \n> Unit: {} - chapter {}\n> Difficulty: {}/5\n\n",
        subject, chapter, difficulty
    ));

    output.push_str("## Problem\n\n\n\n");
    output.push_str("## Hint\n\n\n\n");
    output.push_str("## Answer\n\n\n\n");
    output.push_str("## Notes\n\n\n\n");

    output.push_str("## Review checklist\n\n");
    for (step, note) in STEP_NOTES.iter().enumerate() {
        output.push_str(&format!("- [ ] **Review {}** | {}\n", step + 1, note));
    }

    output
}

fn escape_yaml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
