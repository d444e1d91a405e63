//! Rc file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::rc as rc_config;
use crate::error::FlyError;

use super::models::RcFile;

/// Handles reading the targets rc file
pub struct RcStore {
    rc_path: PathBuf,
}

impl Default for RcStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RcStore {
    /// Create a new store using the default rc path (~/.flyrc)
    pub fn new() -> Self {
        Self {
            rc_path: Self::default_rc_path(),
        }
    }

    /// Create a store with a custom rc path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { rc_path: path }
    }

    /// Path of the rc file backing this store
    pub fn path(&self) -> &Path {
        &self.rc_path
    }

    fn default_rc_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rc_config::FILE_NAME)
    }

    /// Load the rc file from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt YAML.
    pub fn load(&self) -> Result<RcFile, FlyError> {
        if !self.rc_path.exists() {
            return Ok(RcFile::default());
        }

        let content = fs::read_to_string(&self.rc_path).map_err(|e| {
            FlyError::Config(format!(
                "Failed to read rc file {}: {}",
                self.rc_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(RcFile::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            FlyError::Config(format!(
                "Failed to parse rc file {}: {}",
                self.rc_path.display(),
                e
            ))
        })
    }
}
