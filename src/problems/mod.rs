//! Problem bank: records, grading, grids, and the vault-backed store
//!
//! This module provides:
//! - `ProblemRecord` parsing from markdown notes
//! - the review-grade classifier (S..F mastery grades)
//! - fixed-capacity chapter grids with per-grade statistics
//! - the filesystem store (scan, create, record scores, check reviews)

pub mod algorithm;
pub mod grid;
pub mod models;
pub mod storage;

pub use algorithm::{grade_for, Grade};
pub use grid::{ChapterGrid, GradeHistogram, GridSlot, SlotState};
pub use models::*;
pub use storage::{BulkOutcome, ProblemStore, ProblemStoreError};
