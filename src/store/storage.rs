use super::types::ContributionLog;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default contribution log path (~/.config/contrib-chain/contributions.json)
pub fn get_store_path() -> PathBuf {
    crate::config::get_config_dir().join("contributions.json")
}

/// Load the contribution log from a JSON file
///
/// If the file doesn't exist, returns a new empty log.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_log(path: &Path) -> Result<ContributionLog> {
    if !path.exists() {
        return Ok(ContributionLog::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open contribution log at {}", path.display()))?;

    let log: ContributionLog =
        serde_json::from_reader(file).context("Failed to load contribution log")?;

    if log.version != 1 {
        anyhow::bail!("Unsupported contribution log version: {}", log.version);
    }

    Ok(log)
}

/// Save the contribution log to a JSON file atomically
///
/// Uses atomic-write-file so the log is never left in a corrupted state.
/// Creates the config directory if it doesn't exist.
pub fn save_log(path: &Path, log: &ContributionLog) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log).context("Failed to serialize contribution log")?;

    file.commit().context("Failed to save contribution log")?;

    Ok(())
}
