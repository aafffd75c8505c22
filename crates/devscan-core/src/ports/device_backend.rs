//! Device backend port.
//!
//! A backend detects one class of compute target on the host. The runtime
//! core owns a list of backends and never touches hardware itself.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DeviceDescriptor, DeviceKind};

/// Errors a backend can hit while enumerating.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Reading a sysfs path failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sysfs file had unexpected contents.
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The backend cannot run on this host at all.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl BackendError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Port for detecting devices of one kind.
///
/// # Example
///
/// ```ignore
/// use devscan_core::ports::DeviceBackend;
///
/// fn count(backend: &dyn DeviceBackend) -> usize {
///     backend.enumerate().map(|d| d.len()).unwrap_or(0)
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait DeviceBackend: Send + Sync {
    /// Kind of device this backend reports.
    fn kind(&self) -> DeviceKind;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Scan the host, returning devices in a stable order.
    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, BackendError>;
}
