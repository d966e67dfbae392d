//! Configuration models

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One subject being studied and how many chapters it spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    pub name: String,
    pub chapters: u32,
}

impl SubjectConfig {
    pub fn new(name: &str, chapters: u32) -> Self {
        Self {
            name: name.to_string(),
            chapters,
        }
    }
}

fn default_problems_folder() -> PathBuf {
    PathBuf::from("problems")
}

fn default_max_problems_per_chapter() -> u32 {
    100
}

fn default_daily_goal() -> u32 {
    5
}

/// Dashboard settings, persisted as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Root folder of the problem bank, organized `subject/chapter-<n>/`.
    #[serde(default = "default_problems_folder")]
    pub problems_folder: PathBuf,
    /// Grid capacity per chapter (slot numbers 1..=N).
    #[serde(default = "default_max_problems_per_chapter")]
    pub max_problems_per_chapter: u32,
    /// Problems to add per day.
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
    /// Exam or deadline date for the countdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subject: Option<String>,
    #[serde(default)]
    pub subjects: Vec<SubjectConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            problems_folder: default_problems_folder(),
            max_problems_per_chapter: default_max_problems_per_chapter(),
            daily_goal: default_daily_goal(),
            target_date: None,
            default_subject: Some("Math".to_string()),
            subjects: vec![
                SubjectConfig::new("Math", 10),
                SubjectConfig::new("Physics", 8),
                SubjectConfig::new("Chemistry", 8),
                SubjectConfig::new("Biology", 7),
                SubjectConfig::new("English", 12),
                SubjectConfig::new("Literature", 10),
                SubjectConfig::new("History", 15),
            ],
        }
    }
}

impl DashboardConfig {
    /// Look up a subject by exact name (case-insensitive).
    pub fn subject(&self, name: &str) -> Option<&SubjectConfig> {
        self.subjects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}
