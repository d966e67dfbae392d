//! Dashboard configuration
//!
//! An explicit configuration struct owned at the application edge and passed
//! by reference into components; load/save is a JSON file under the platform
//! data directory.

mod models;
mod storage;

pub use models::*;
pub use storage::{ConfigError, ConfigStorage};
