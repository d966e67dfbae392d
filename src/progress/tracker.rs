//! Progress tracking over the problem store

use chrono::NaiveDate;

use crate::config::{DashboardConfig, SubjectConfig};
use crate::problems::{ChapterGrid, GradeHistogram, ProblemStore};
use crate::problems::storage::Result;

use super::models::{ChapterSummary, SubjectOverview, TodayProgress};

/// Read-only progress rollups; every query re-scans the vault so results
/// always reflect the notes on disk.
pub struct ProgressTracker<'a> {
    store: &'a ProblemStore,
    config: &'a DashboardConfig,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(store: &'a ProblemStore, config: &'a DashboardConfig) -> Self {
        Self { store, config }
    }

    /// Summarize one chapter at the configured grid capacity.
    pub fn chapter_summary(&self, subject: &str, chapter: u32) -> Result<ChapterSummary> {
        let records = self.store.scan_chapter(subject, chapter)?;
        let capacity = self.config.max_problems_per_chapter;
        let grid = ChapterGrid::build(subject, chapter, &records, capacity);

        let average_understanding = if records.is_empty() {
            0
        } else {
            let sum: u64 = records
                .values()
                .map(|r| u64::from(r.average_understanding()))
                .sum();
            (sum as f64 / records.len() as f64).round() as u32
        };

        Ok(ChapterSummary {
            chapter,
            capacity,
            occupied: grid.histogram.occupied(),
            empty: grid.histogram.empty,
            histogram: grid.histogram,
            average_understanding,
        })
    }

    /// Roll up every configured chapter of a subject.
    pub fn subject_overview(&self, subject: &SubjectConfig) -> Result<SubjectOverview> {
        let mut chapters = Vec::with_capacity(subject.chapters as usize);
        let mut histogram = GradeHistogram::default();
        let mut total_problems = 0;

        for chapter in 1..=subject.chapters {
            let summary = self.chapter_summary(&subject.name, chapter)?;
            total_problems += summary.occupied;
            histogram.absorb(&summary.histogram);
            chapters.push(summary);
        }

        Ok(SubjectOverview {
            subject: subject.name.clone(),
            mastered: histogram.s,
            total_problems,
            histogram,
            chapters,
        })
    }

    /// Standing against the daily goal and target date as of `today`.
    ///
    /// Counts notes whose `created` field is today across every configured
    /// subject; review events carry no dates in the note format, so creation
    /// is the only dated signal.
    pub fn today_progress(&self, today: NaiveDate) -> Result<TodayProgress> {
        let mut created_today = 0;

        for subject in &self.config.subjects {
            for chapter in 1..=subject.chapters {
                let records = self.store.scan_chapter(&subject.name, chapter)?;
                created_today += records
                    .values()
                    .filter(|r| r.created == Some(today))
                    .count() as u32;
            }
        }

        Ok(TodayProgress {
            date: today,
            created_today,
            daily_goal: self.config.daily_goal,
            goal_met: created_today >= self.config.daily_goal,
            days_until_target: self
                .config
                .target_date
                .map(|target| (target - today).num_days()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubjectConfig;
    use crate::problems::NewProblem;
    use tempfile::tempdir;

    fn test_config() -> DashboardConfig {
        DashboardConfig {
            max_problems_per_chapter: 10,
            daily_goal: 2,
            target_date: NaiveDate::from_ymd_opt(2026, 12, 31),
            subjects: vec![SubjectConfig::new("Math", 2)],
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn test_chapter_summary_partitions_capacity() {
        let vault = tempdir().unwrap();
        let store = ProblemStore::new(vault.path().to_path_buf());
        let config = test_config();

        store
            .create_problem(&NewProblem::new("Math", 1, 1, "One"))
            .unwrap();
        store
            .create_problem(&NewProblem::new("Math", 1, 4, "Four"))
            .unwrap();

        let tracker = ProgressTracker::new(&store, &config);
        let summary = tracker.chapter_summary("Math", 1).unwrap();

        assert_eq!(summary.occupied, 2);
        assert_eq!(summary.empty, 8);
        assert_eq!(summary.occupied + summary.empty, summary.capacity);
    }

    #[test]
    fn test_subject_overview_totals() {
        let vault = tempdir().unwrap();
        let store = ProblemStore::new(vault.path().to_path_buf());
        let config = test_config();

        store
            .create_problem(&NewProblem::new("Math", 1, 1, "One"))
            .unwrap();
        store
            .create_problem(&NewProblem::new("Math", 2, 1, "Other chapter"))
            .unwrap();

        let tracker = ProgressTracker::new(&store, &config);
        let overview = tracker
            .subject_overview(config.subject("Math").unwrap())
            .unwrap();

        assert_eq!(overview.chapters.len(), 2);
        assert_eq!(overview.total_problems, 2);
        // Fresh notes have no reviews, so nothing is mastered yet.
        assert_eq!(overview.mastered, 0);
        assert_eq!(overview.histogram.f, 2);
    }

    #[test]
    fn test_today_progress_counts_created_notes() {
        let vault = tempdir().unwrap();
        let store = ProblemStore::new(vault.path().to_path_buf());
        let config = test_config();

        // create_problem stamps notes with the local date.
        store
            .create_problem(&NewProblem::new("Math", 1, 1, "One"))
            .unwrap();

        let today = chrono::Local::now().date_naive();
        let tracker = ProgressTracker::new(&store, &config);
        let progress = tracker.today_progress(today).unwrap();

        assert_eq!(progress.created_today, 1);
        assert!(!progress.goal_met);

        store
            .create_problem(&NewProblem::new("Math", 1, 2, "Two"))
            .unwrap();
        let progress = tracker.today_progress(today).unwrap();
        assert!(progress.goal_met);
    }

    #[test]
    fn test_days_until_target() {
        let vault = tempdir().unwrap();
        let store = ProblemStore::new(vault.path().to_path_buf());
        let config = test_config();

        let tracker = ProgressTracker::new(&store, &config);
        let today = NaiveDate::from_ymd_opt(2026, 12, 21).unwrap();
        let progress = tracker.today_progress(today).unwrap();

        assert_eq!(progress.days_until_target, Some(10));
    }
}
