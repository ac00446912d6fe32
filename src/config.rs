use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Survey CSV, relative to the working directory.
pub const SOURCE_PATH: &str = "ges.csv";

/// File name offered when exporting the table. Not configurable.
pub const EXPORT_FILE_NAME: &str = "GES_Table.csv";

/// Optional overrides, read from the working directory at startup.
pub const SETTINGS_FILE: &str = "ges-viewer.json";

pub const DATASET_URL: &str = "https://beta.data.gov.sg/datasets/415/view";
pub const LICENSE_URL: &str = "https://beta.data.gov.sg/open-data-license";
pub const REPOSITORY_URL: &str = "https://google.com";

pub const WINDOW_SIZE: [f32; 2] = [1400.0, 860.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 420.0];

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub source_path: PathBuf,
    pub repository_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(SOURCE_PATH),
            repository_url: REPOSITORY_URL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Read settings from a JSON file. Unknown keys are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// [`SETTINGS_FILE`] if present and valid, defaults otherwise.
    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Using settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }
}
