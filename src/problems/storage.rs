//! Filesystem store for problem notes
//!
//! Problems live at `<root>/<subject>/chapter-<n>/NNN_<slug>.md`. Scanning is
//! a pure read: every markdown file in scope is parsed into a
//! `ProblemRecord` or skipped, and one broken file never aborts the scan.
//! Writes are independent read-modify-write operations on single files;
//! last-write-wins at the filesystem level.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use regex::Regex;
use thiserror::Error;
use walkdir::WalkDir;

use crate::markdown;

use super::models::{NewProblem, ProblemRecord, DEFAULT_DIFFICULTY};

#[derive(Error, Debug)]
pub enum ProblemStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{subject} chapter {chapter} problem {number} already exists")]
    ProblemExists {
        subject: String,
        chapter: u32,
        number: u32,
    },

    #[error("{subject} chapter {chapter} problem {number} not found")]
    ProblemNotFound {
        subject: String,
        chapter: u32,
        number: u32,
    },

    #[error("Understanding score {0} is out of range (0-100)")]
    ScoreOutOfRange(u32),

    #[error("Every review step is already checked")]
    ChecklistExhausted,
}

pub type Result<T> = std::result::Result<T, ProblemStoreError>;

/// Outcome of a bulk-create run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkOutcome {
    pub created: u32,
    pub skipped: u32,
}

pub struct ProblemStore {
    root: PathBuf,
}

impl ProblemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn subject_dir(&self, subject: &str) -> PathBuf {
        self.root.join(subject)
    }

    pub fn chapter_dir(&self, subject: &str, chapter: u32) -> PathBuf {
        self.subject_dir(subject).join(format!("chapter-{}", chapter))
    }

    // ===== Scanning =====

    /// Scan one chapter into a slot-number → record map.
    ///
    /// A missing chapter directory is an empty chapter, not an error. Files
    /// are visited in sorted path order so duplicate slot numbers resolve
    /// deterministically (later path wins, with a warning).
    pub fn scan_chapter(
        &self,
        subject: &str,
        chapter: u32,
    ) -> Result<BTreeMap<u32, ProblemRecord>> {
        let dir = self.chapter_dir(subject, chapter);
        if !dir.exists() {
            return Ok(BTreeMap::new());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown(e.path()))
            .map(|e| e.into_path())
            .collect();
        paths.sort();

        let mut records: BTreeMap<u32, ProblemRecord> = BTreeMap::new();
        let mut sources: BTreeMap<u32, PathBuf> = BTreeMap::new();

        for path in paths {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("Skipping unreadable note {:?}: {}", path, err);
                    continue;
                }
            };

            let Some(record) = parse_problem_note(&content, subject, chapter, &path) else {
                continue;
            };

            let number = record.number;
            if let Some(previous) = sources.insert(number, path.clone()) {
                log::warn!(
                    "Duplicate problem number {} in {} chapter {}: {:?} overrides {:?}",
                    number,
                    subject,
                    chapter,
                    path,
                    previous
                );
            }
            records.insert(number, record);
        }

        Ok(records)
    }

    /// Count problems across every chapter of a subject.
    pub fn count_problems(&self, subject: &str, chapters: u32) -> Result<usize> {
        let mut total = 0;
        for chapter in 1..=chapters {
            total += self.scan_chapter(subject, chapter)?.len();
        }
        Ok(total)
    }

    // ===== File lookup =====

    /// Locate a slot's note by its `NNN_` filename prefix.
    pub fn find_problem_file(
        &self,
        subject: &str,
        chapter: u32,
        number: u32,
    ) -> Result<Option<PathBuf>> {
        let dir = self.chapter_dir(subject, chapter);
        if !dir.exists() {
            return Ok(None);
        }

        let prefix_re = Regex::new(r"^(\d+)_").unwrap();

        let mut paths: Vec<PathBuf> = WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown(e.path()))
            .map(|e| e.into_path())
            .collect();
        paths.sort();

        for path in paths {
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };
            if let Some(caps) = prefix_re.captures(&stem) {
                if caps[1].parse::<u32>().ok() == Some(number) {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    // ===== Creation =====

    /// Create a new problem note from the template.
    ///
    /// The chapter folder is created on demand (an "already exists" race is
    /// not an error); an occupied slot is.
    pub fn create_problem(&self, new: &NewProblem) -> Result<PathBuf> {
        let dir = self.chapter_dir(&new.subject, new.chapter);
        fs::create_dir_all(&dir)?;

        if self
            .find_problem_file(&new.subject, new.chapter, new.number)?
            .is_some()
        {
            return Err(ProblemStoreError::ProblemExists {
                subject: new.subject.clone(),
                chapter: new.chapter,
                number: new.number,
            });
        }

        let file_name = format!("{:03}_{}.md", new.number, slugify(&new.title));
        let path = dir.join(file_name);

        let today = Local::now().date_naive();
        let content = markdown::problem_note(
            &new.subject,
            new.chapter,
            new.number,
            &new.title,
            new.difficulty,
            today,
        );
        fs::write(&path, content)?;

        log::info!(
            "Created problem {} in {} chapter {}",
            new.number,
            new.subject,
            new.chapter
        );
        Ok(path)
    }

    /// Create every missing slot in a number range, skipping occupied ones.
    pub fn bulk_create(
        &self,
        subject: &str,
        chapter: u32,
        start: u32,
        end: u32,
    ) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();

        for number in start..=end {
            let new = NewProblem {
                subject: subject.to_string(),
                chapter,
                number,
                title: format!("Problem {}", number),
                difficulty: DEFAULT_DIFFICULTY,
            };
            match self.create_problem(&new) {
                Ok(_) => outcome.created += 1,
                Err(ProblemStoreError::ProblemExists { .. }) => outcome.skipped += 1,
                Err(err) => return Err(err),
            }
        }

        Ok(outcome)
    }

    // ===== Per-note updates =====

    /// Append a self-rated understanding score (0..=100) to a note, and
    /// optionally a solve duration.
    pub fn record_understanding(
        &self,
        subject: &str,
        chapter: u32,
        number: u32,
        score: u32,
        time: Option<&str>,
    ) -> Result<()> {
        if score > 100 {
            return Err(ProblemStoreError::ScoreOutOfRange(score));
        }

        let path = self.require_problem_file(subject, chapter, number)?;
        let content = fs::read_to_string(&path)?;

        let mut updated =
            markdown::append_list_entry(&content, "understandings", &score.to_string());
        if let Some(time) = time {
            updated =
                markdown::append_list_entry(&updated, "times", &format!("\"{}\"", time));
        }
        fs::write(&path, updated)?;

        log::info!(
            "Recorded understanding {} for {} chapter {} problem {}",
            score,
            subject,
            chapter,
            number
        );
        Ok(())
    }

    /// Check off the next review step in a note.
    ///
    /// Flips the first unchecked review checklist item and keeps the
    /// informational `reviewCount` field in sync with the derived count.
    /// Returns the new derived review count.
    pub fn check_review(&self, subject: &str, chapter: u32, number: u32) -> Result<u32> {
        let path = self.require_problem_file(subject, chapter, number)?;
        let content = fs::read_to_string(&path)?;

        let updated = markdown::check_next_review(&content)
            .ok_or(ProblemStoreError::ChecklistExhausted)?;

        let (_, body) = markdown::split_frontmatter(&updated);
        let count = markdown::count_checked_reviews(body);
        let updated = markdown::set_scalar_field(&updated, "reviewCount", &count.to_string());

        fs::write(&path, updated)?;

        log::info!(
            "Checked review {} for {} chapter {} problem {}",
            count,
            subject,
            chapter,
            number
        );
        Ok(count)
    }

    fn require_problem_file(&self, subject: &str, chapter: u32, number: u32) -> Result<PathBuf> {
        self.find_problem_file(subject, chapter, number)?.ok_or_else(|| {
            ProblemStoreError::ProblemNotFound {
                subject: subject.to_string(),
                chapter,
                number,
            }
        })
    }
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref(),
        Some("md") | Some("markdown")
    )
}

/// Parse one note into a record, or `None` when it is not a problem note.
///
/// A note without a numeric `number` header field is not an error; it simply
/// is not a problem record.
fn parse_problem_note(
    content: &str,
    subject: &str,
    chapter: u32,
    path: &Path,
) -> Option<ProblemRecord> {
    let (header, body) = markdown::split_frontmatter(content);
    let header = header?;

    let number = header.get("number").and_then(markdown::as_u32)?;
    if number == 0 {
        return None;
    }

    let title = header
        .get("title")
        .and_then(markdown::as_string)
        .or_else(|| title_from_file_name(path))
        .unwrap_or_default();

    let difficulty = header
        .get("difficulty")
        .and_then(markdown::as_u32)
        .map(|d| d.clamp(1, 5) as u8)
        .unwrap_or(DEFAULT_DIFFICULTY);

    let understanding_scores = header
        .get("understandings")
        .map(markdown::as_u32_list)
        .unwrap_or_default();

    let times = header
        .get("times")
        .map(markdown::as_string_list)
        .unwrap_or_default();

    Some(ProblemRecord {
        subject: subject.to_string(),
        chapter,
        number,
        title,
        difficulty,
        review_count: markdown::count_checked_reviews(body),
        understanding_scores,
        times,
        created: header.get("created").and_then(markdown::as_date),
    })
}

/// Fallback title from a `NNN_some_title` file stem.
fn title_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let stripped = Regex::new(r"^\d+_").unwrap().replace(&stem, "");
    let title = stripped.replace('_', " ").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Reduce a title to a filename-safe slug.
fn slugify(title: &str) -> String {
    let slug = Regex::new(r"\W+")
        .unwrap()
        .replace_all(title, "_")
        .trim_matches('_')
        .to_string();
    if slug.is_empty() {
        "problem".to_string()
    } else {
        slug
    }
}
