//! Configuration storage
//!
//! Loads and saves `config.json` under the platform data directory. A
//! missing file yields defaults; components never read configuration from
//! anywhere else.

use std::fs;
use std::path::PathBuf;

use super::models::DashboardConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub struct ConfigStorage {
    base_path: PathBuf,
}

impl ConfigStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|p| p.join("gnosis"))
            .ok_or(ConfigError::DataDirNotFound)
    }

    fn config_file(&self) -> PathBuf {
        self.base_path.join("config.json")
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<DashboardConfig, ConfigError> {
        let path = self.config_file();
        if !path.exists() {
            return Ok(DashboardConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Persist the configuration, creating the data directory on demand.
    pub fn save(&self, config: &DashboardConfig) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base_path)?;

        let content = serde_json::to_string_pretty(config)?;
        fs::write(self.config_file(), content)?;

        log::info!("Saved configuration to {:?}", self.config_file());
        Ok(())
    }

    /// Whether a configuration file exists yet.
    pub fn exists(&self) -> bool {
        self.config_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubjectConfig;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::new(dir.path().to_path_buf());

        let config = storage.load().unwrap();
        assert_eq!(config.max_problems_per_chapter, 100);
        assert_eq!(config.daily_goal, 5);
        assert!(!config.subjects.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::new(dir.path().join("nested"));

        let mut config = DashboardConfig::default();
        config.max_problems_per_chapter = 200;
        config.target_date = NaiveDate::from_ymd_opt(2026, 12, 31);
        config.subjects = vec![SubjectConfig::new("Math", 4)];

        storage.save(&config).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded.max_problems_per_chapter, 200);
        assert_eq!(loaded.target_date, config.target_date);
        assert_eq!(loaded.subjects.len(), 1);
        assert_eq!(loaded.subjects[0].chapters, 4);
    }

    #[test]
    fn test_subject_lookup_is_case_insensitive() {
        let config = DashboardConfig::default();
        assert!(config.subject("math").is_some());
        assert!(config.subject("Underwater basket weaving").is_none());
    }
}
