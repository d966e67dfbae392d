//! Data models for the problem bank

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default difficulty when a note declares none (the 1..=5 scale has no
/// meaningful zero).
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// One practice problem, parsed from a markdown note.
///
/// Records are re-derived from disk on every scan; nothing here is cached
/// state. `review_count` in particular always mirrors the note's checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    pub subject: String,
    pub chapter: u32,
    /// Slot index within the chapter grid, unique per (subject, chapter).
    pub number: u32,
    pub title: String,
    /// 1..=5
    pub difficulty: u8,
    /// Count of checked review checklist items in the note body.
    pub review_count: u32,
    /// Self-rated understanding entries (0..=100), oldest first.
    #[serde(default)]
    pub understanding_scores: Vec<u32>,
    /// Recorded solve durations as `HH:MM:SS` strings, oldest first.
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
}

impl ProblemRecord {
    /// Rounded mean of the understanding entries, 0 when none are recorded.
    pub fn average_understanding(&self) -> u32 {
        if self.understanding_scores.is_empty() {
            return 0;
        }
        let sum: u64 = self.understanding_scores.iter().map(|&s| u64::from(s)).sum();
        let mean = sum as f64 / self.understanding_scores.len() as f64;
        mean.round() as u32
    }
}

/// Request to create a new problem note.
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub subject: String,
    pub chapter: u32,
    pub number: u32,
    pub title: String,
    pub difficulty: u8,
}

impl NewProblem {
    pub fn new(subject: &str, chapter: u32, number: u32, title: &str) -> Self {
        Self {
            subject: subject.to_string(),
            chapter,
            number,
            title: title.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Builder method to set difficulty, clamped into the 1..=5 scale.
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty.clamp(1, 5);
        self
    }
}
