// Editor configuration: note section titles and the dictionary location.
//
// Read from config.json in the platform config directory. A missing file
// means defaults; a malformed file is an error rather than a silent fallback.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Note section titles in preview order, matching the original chart layout
const DEFAULT_SECTIONS: &[&str] = &[
    "CC>",
    "PI>",
    "ROS>",
    "PMH>",
    "S>",
    "O>",
    "Physical Exam>",
    "A>",
    "P>",
    "Comment>",
];

/// Config file name inside the config directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-adjustable editor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Where the abbreviations database lives; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Note section titles, in preview order
    pub sections: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EditorConfig {
    /// Load the config from the platform config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = crate::paths::get_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from(&path)
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        crate::info!("Loaded config from {:?} ({} sections)", path, config.sections.len());
        Ok(config)
    }

    /// The directory the dictionary database should live in.
    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => crate::paths::get_data_dir().unwrap_or_else(|e| {
                crate::warn!("No platform data directory ({}), falling back to cwd", e);
                PathBuf::from(".")
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
