//! Runtime configuration.
//!
//! Configuration comes from the environment (`DEVSCAN_*`), with CLI flags
//! layered on top by the binary. Parsing goes through a lookup function so
//! tests never have to touch the process environment.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{DeviceIdError, DeviceKind};

/// Environment variable overriding the sysfs root.
pub const ENV_SYSFS_ROOT: &str = "DEVSCAN_SYSFS_ROOT";

/// Environment variable selecting enabled backends (comma separated).
pub const ENV_BACKENDS: &str = "DEVSCAN_BACKENDS";

/// Default sysfs mount point.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown backend '{0}' (expected cpu, gpu or npu)")]
    UnknownBackend(String),

    #[error("Backend {0} listed more than once")]
    DuplicateBackend(DeviceKind),

    #[error("sysfs root must not be empty")]
    EmptySysfsRoot,
}

/// Settings for building a runtime core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Root of the sysfs tree scanned by the Linux backends.
    pub sysfs_root: PathBuf,
    /// Enabled backends, in registration order.
    pub backends: Vec<DeviceKind>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            backends: DeviceKind::ALL.to_vec(),
        }
    }
}

impl RuntimeConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(root) = lookup(ENV_SYSFS_ROOT) {
            config = config.with_sysfs_root(root)?;
        }
        if let Some(list) = lookup(ENV_BACKENDS) {
            config.backends = parse_backend_list(&list)?;
        }
        Ok(config)
    }

    /// Override the sysfs root.
    pub fn with_sysfs_root(mut self, root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(ConfigError::EmptySysfsRoot);
        }
        self.sysfs_root = root.to_path_buf();
        Ok(self)
    }

    /// Override the backend list from its textual form.
    pub fn with_backend_list(mut self, list: &str) -> Result<Self, ConfigError> {
        self.backends = parse_backend_list(list)?;
        Ok(self)
    }
}

/// Parse a comma-separated backend list such as `"cpu, gpu"`.
///
/// Empty entries are skipped, so `""` is a valid, empty list.
pub fn parse_backend_list(list: &str) -> Result<Vec<DeviceKind>, ConfigError> {
    let mut kinds = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let kind: DeviceKind = entry.parse().map_err(|err| match err {
            DeviceIdError::UnknownKind(name) => ConfigError::UnknownBackend(name),
            _ => ConfigError::UnknownBackend(entry.to_string()),
        })?;
        if kinds.contains(&kind) {
            return Err(ConfigError::DuplicateBackend(kind));
        }
        kinds.push(kind);
    }
    Ok(kinds)
}
