//! Errors surfaced by the runtime core.

use thiserror::Error;

use crate::domain::{DeviceIdError, DeviceKind};

/// Top-level error for runtime core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two backends were registered for the same device kind.
    #[error("More than one backend registered for {0}")]
    DuplicateBackend(DeviceKind),

    /// The identifier could not be parsed.
    #[error("Invalid device identifier: {0}")]
    InvalidDeviceId(#[from] DeviceIdError),

    /// No device with this identifier is currently available.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The device exists but does not expose the requested property.
    #[error("Property {property} not supported by {device}")]
    PropertyNotFound { device: String, property: String },
}
