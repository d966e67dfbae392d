//! Review grade classification
//!
//! Problems are classified into seven ordinal mastery grades from the number
//! of completed reviews, gated on a positive understanding score. Both
//! signals must be present: a problem reviewed ten times but never rated, or
//! rated but never reviewed, stays at F.
//!
//! Once the gate is satisfied the grade is a step function of the review
//! count alone; the magnitude of the understanding score is deliberately not
//! weighed further.

use serde::{Deserialize, Serialize};

/// Ordinal mastery grade. Declaration order gives `F < E < ... < S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// All grades from best to worst, the order thresholds are scanned in.
    pub const DESCENDING: [Grade; 7] = [
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
    ];

    /// Minimum review count required for this grade (once the gate holds).
    pub fn min_reviews(self) -> u32 {
        match self {
            Grade::S => 10,
            Grade::A => 7,
            Grade::B => 5,
            Grade::C => 3,
            Grade::D => 2,
            Grade::E => 1,
            Grade::F => 0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Grade::S => "Mastered",
            Grade::A => "Fluent",
            Grade::B => "Solid",
            Grade::C => "Developing",
            Grade::D => "Shaky",
            Grade::E => "Started",
            Grade::F => "Untrained",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Grade::S => "\u{1F451}",         // 👑
            Grade::A => "\u{2B50}",          // ⭐
            Grade::B => "\u{1F525}",         // 🔥
            Grade::C => "\u{1F4DA}",         // 📚
            Grade::D => "\u{1F4D6}",         // 📖
            Grade::E => "\u{26D3}\u{FE0F}",  // ⛓️
            Grade::F => "\u{1F437}",         // 🐷
        }
    }

    /// Display color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Grade::S => "#800080",
            Grade::A => "#FFD700",
            Grade::B => "#B22222",
            Grade::C => "#708090",
            Grade::D => "#654321",
            Grade::E => "#2F4F4F",
            Grade::F => "#1a1a1a",
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

/// Classify a problem from its review count and average understanding.
///
/// Total over all inputs: either signal at zero means F, otherwise the
/// highest grade whose review threshold is met.
pub fn grade_for(review_count: u32, average_understanding: u32) -> Grade {
    if review_count == 0 || average_understanding == 0 {
        return Grade::F;
    }

    for grade in Grade::DESCENDING {
        if review_count >= grade.min_reviews() {
            return grade;
        }
    }

    Grade::F
}
