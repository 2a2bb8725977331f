use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::icon::IconError;

pub const DEFAULT_INPUT: &str = "assets/logo.png";
pub const DEFAULT_OUTPUT_DIR: &str = "src/images";
pub const DEFAULT_SIZES: &[u32] = &[16, 48, 128];

/// What to resize and where to put the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl IconConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, sizes: Vec<u32>) -> Self {
        IconConfig {
            input: input.into(),
            output_dir: output_dir.into(),
            sizes,
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<IconConfig, IconError> {
        let config_error = |reason: String| IconError::ConfigError {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Check the size list. Does not touch the filesystem.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.sizes.is_empty() {
            return Err(IconError::NoSizes);
        }

        if let Some(&size) = self.sizes.iter().find(|&&size| size == 0) {
            return Err(IconError::InvalidSize { size });
        }

        Ok(())
    }

    /// Join relative paths onto `base`. Absolute paths are kept as is.
    pub fn resolve_against(&self, base: &Path) -> IconConfig {
        IconConfig {
            input: base.join(&self.input),
            output_dir: base.join(&self.output_dir),
            sizes: self.sizes.clone(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES.to_vec())
    }
}
