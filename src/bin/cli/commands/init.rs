use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use gnosis::config::{ConfigStorage, DashboardConfig};

pub fn run(vault_override: Option<&Path>, force: bool) -> Result<()> {
    let data_dir = ConfigStorage::default_data_dir()
        .context("Failed to get data directory")?;
    let storage = ConfigStorage::new(data_dir);

    if storage.exists() && !force {
        bail!("A config already exists. Pass --force to overwrite it.");
    }

    let mut config = DashboardConfig::default();
    if let Some(vault) = vault_override {
        config.problems_folder = vault.to_path_buf();
    }

    storage.save(&config).context("Failed to save configuration")?;

    // Scaffold the subject folders; chapter folders appear on demand.
    for subject in &config.subjects {
        fs::create_dir_all(config.problems_folder.join(&subject.name))
            .context("Failed to create subject folder")?;
    }

    println!(
        "Initialized config with {} subjects; problem bank at {:?}",
        config.subjects.len(),
        config.problems_folder
    );
    Ok(())
}
