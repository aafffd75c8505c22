//! Port definitions (trait abstractions) for device probing.
//!
//! Ports define the interfaces the runtime core expects from adapters.
//! Implementations live in `devscan-runtime`.

pub mod device_backend;

pub use device_backend::{BackendError, DeviceBackend};

#[cfg(test)]
pub use device_backend::MockDeviceBackend;
