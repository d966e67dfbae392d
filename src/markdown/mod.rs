//! Markdown note parsing and generation
//!
//! Problem notes are plain markdown with YAML frontmatter. This module owns:
//! - frontmatter splitting and duck-typed field normalization
//! - review checklist extraction from note bodies
//! - the note template new problems are created from

mod checklist;
mod frontmatter;
mod template;

pub use checklist::*;
pub use frontmatter::*;
pub use template::*;
