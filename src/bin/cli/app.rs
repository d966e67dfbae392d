use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use gnosis::config::{ConfigStorage, DashboardConfig, SubjectConfig};
use gnosis::problems::ProblemStore;

/// Shared application state for CLI commands
pub struct App {
    pub config: DashboardConfig,
    pub store: ProblemStore,
}

impl App {
    /// Initialize from the config in the default data directory.
    pub fn new(vault_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = ConfigStorage::default_data_dir()
            .context("Failed to get data directory")?;

        let config = ConfigStorage::new(data_dir)
            .load()
            .context("Failed to load configuration")?;

        let root = vault_override.unwrap_or_else(|| config.problems_folder.clone());
        let store = ProblemStore::new(root);

        Ok(Self { config, store })
    }

    /// Find a subject by name (case-insensitive prefix match)
    pub fn find_subject(&self, name: &str) -> Result<SubjectConfig> {
        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(s) = self
            .config
            .subjects
            .iter()
            .find(|s| s.name.to_lowercase() == name_lower)
        {
            return Ok(s.clone());
        }

        // Prefix match
        let matches: Vec<&SubjectConfig> = self
            .config
            .subjects
            .iter()
            .filter(|s| s.name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No subject matching '{}'. Configured subjects:\n{}",
                name,
                self.config
                    .subjects
                    .iter()
                    .map(|s| format!("  - {}", s.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous subject name '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|s| format!("  - {}", s.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Grid capacity for a chapter, with an optional per-invocation override.
    pub fn capacity(&self, override_capacity: Option<u32>) -> u32 {
        override_capacity.unwrap_or(self.config.max_problems_per_chapter)
    }
}
