use super::project::Timeline;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default timeline file path (~/.config/contrib-chain/timeline.json)
pub fn get_timeline_path() -> PathBuf {
    crate::config::get_config_dir().join("timeline.json")
}

/// Load the timeline from a JSON file
///
/// If the file doesn't exist, returns a new empty timeline.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_timeline(path: &Path) -> Result<Timeline> {
    if !path.exists() {
        return Ok(Timeline::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open timeline file at {}", path.display()))?;

    let timeline: Timeline = serde_json::from_reader(file).context("Failed to load timeline")?;

    if timeline.version != 1 {
        anyhow::bail!("Unsupported timeline version: {}", timeline.version);
    }

    Ok(timeline)
}

/// Save the timeline to a JSON file atomically
pub fn save_timeline(path: &Path, timeline: &Timeline) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, timeline).context("Failed to serialize timeline")?;

    file.commit().context("Failed to save timeline")?;

    Ok(())
}
