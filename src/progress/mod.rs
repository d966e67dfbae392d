//! Study progress rollups
//!
//! Chapter and subject summaries built from vault scans, plus daily-goal and
//! target-date tracking.

mod models;
mod tracker;

pub use models::*;
pub use tracker::ProgressTracker;
