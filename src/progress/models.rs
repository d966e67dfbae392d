//! Progress reporting models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::problems::GradeHistogram;

/// Aggregate for one chapter of a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub chapter: u32,
    pub capacity: u32,
    pub occupied: u32,
    pub empty: u32,
    pub histogram: GradeHistogram,
    /// Mean of the occupied slots' average understanding, 0 when the chapter
    /// has no problems.
    pub average_understanding: u32,
}

/// Subject-wide rollup across all configured chapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectOverview {
    pub subject: String,
    pub chapters: Vec<ChapterSummary>,
    pub total_problems: u32,
    /// Problems graded S across the subject.
    pub mastered: u32,
    pub histogram: GradeHistogram,
}

/// Standing against the daily goal and the target date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayProgress {
    pub date: NaiveDate,
    /// Problem notes created today, across every configured subject.
    pub created_today: u32,
    pub daily_goal: u32,
    pub goal_met: bool,
    /// Days remaining until the configured target date, negative once past.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_target: Option<i64>,
}
