//! Reloadable operations configuration

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{Config, TxtConfig};
use crate::error::ConfigError;

/// Prefix of the fallback keys shared by every server
const DEFAULT_PREFIX: &str = "opscfg.default.server.";

/// Operations settings that can change while the process runs.
///
/// Keys are looked up as `opscfg.<file stem>.server.<key>` first and then as
/// `opscfg.default.server.<key>`. Reloading is caller-driven: poll
/// [`changed`](Self::changed), then call [`load`](Self::load). Not
/// synchronized; wrap it in a lock to share between threads.
#[derive(Debug)]
pub struct OpsConfig {
    path: PathBuf,
    key_prefix: String,
    current: Option<TxtConfig>,
    last_modified: Option<SystemTime>,
}

impl OpsConfig {
    /// Open and load the file at `path`.
    ///
    /// Fails if the first load fails; later reload failures are kept in the
    /// handle instead.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut cfg = Self::unloaded(path);
        cfg.load()?;
        Ok(cfg)
    }

    /// A handle for `path` that has not been loaded yet
    pub fn unloaded(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            key_prefix: format!("opscfg.{}.server.", stem),
            path,
            current: None,
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Re-read the file. On failure the previous contents are discarded and
    /// lookups report [`ConfigError::NotLoaded`] until a load succeeds.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        self.last_modified = self.modified();
        match TxtConfig::open(&self.path) {
            Ok(cfg) => {
                tracing::info!(
                    path = %self.path.display(),
                    entries = cfg.len(),
                    "loaded ops config"
                );
                self.current = Some(cfg);
                Ok(())
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    /// Whether the file's modification time differs from the one seen at the
    /// previous load or check. A file that cannot be inspected counts as
    /// unchanged.
    pub fn changed(&mut self) -> bool {
        let Some(modified) = self.modified() else {
            return false;
        };
        if self.last_modified == Some(modified) {
            return false;
        }
        self.last_modified = Some(modified);
        true
    }

    fn modified(&self) -> Option<SystemTime> {
        match std::fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(time) => Some(time),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot stat ops config");
                None
            }
        }
    }

    fn loaded(&self) -> Result<&TxtConfig, ConfigError> {
        self.current.as_ref().ok_or_else(|| ConfigError::NotLoaded {
            path: self.path.clone(),
        })
    }
}

impl Config for OpsConfig {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        let cfg = self.loaded()?;
        match cfg.get_string(&format!("{}{}", self.key_prefix, key)) {
            Err(e) if e.is_not_found() => cfg.get_string(&format!("{}{}", DEFAULT_PREFIX, key)),
            other => other,
        }
    }

    fn dump(&self) -> String {
        match self.loaded() {
            Ok(cfg) => cfg.dump(),
            Err(e) => e.to_string(),
        }
    }
}
