//! Core domain types and port definitions for devscan.
//!
//! This crate owns the [`Core`] runtime handle, the [`DeviceBackend`] port
//! and the configuration types. It performs no probing of its own; concrete
//! backends live in `devscan-runtime`.
//!
//! ```ignore
//! let core = Core::new(backends)?;
//! println!("{:?}", core.available_devices());
//! ```
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod runtime;

pub use config::{ConfigError, RuntimeConfig, parse_backend_list};
pub use domain::{Device, DeviceDescriptor, DeviceId, DeviceIdError, DeviceKind, FULL_DEVICE_NAME};
pub use error::CoreError;
pub use ports::{BackendError, DeviceBackend};
pub use runtime::Core;
