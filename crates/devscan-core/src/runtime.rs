//! The runtime core handle.
//!
//! `Core` aggregates device backends and assigns device identifiers.
//! Nothing is cached: every query re-runs the backends.

use tracing::{debug, warn};

use crate::domain::{Device, DeviceId, DeviceKind};
use crate::error::CoreError;
use crate::ports::DeviceBackend;

/// Handle to an initialized set of device backends.
pub struct Core {
    backends: Vec<Box<dyn DeviceBackend>>,
}

impl std::fmt::Debug for Core {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Core")
            .field("backends", &self.backend_kinds())
            .finish()
    }
}

impl Core {
    /// Acquire a runtime core over the given backends.
    ///
    /// Backends are queried in the order given. Each device kind may be
    /// claimed by at most one backend.
    pub fn new(backends: Vec<Box<dyn DeviceBackend>>) -> Result<Self, CoreError> {
        let mut seen: Vec<DeviceKind> = Vec::with_capacity(backends.len());
        for backend in &backends {
            let kind = backend.kind();
            if seen.contains(&kind) {
                return Err(CoreError::DuplicateBackend(kind));
            }
            seen.push(kind);
        }
        debug!(backends = ?seen, "runtime core initialized");
        Ok(Self { backends })
    }

    /// Device kinds handled by this core, in registration order.
    pub fn backend_kinds(&self) -> Vec<DeviceKind> {
        self.backends.iter().map(|b| b.kind()).collect()
    }

    /// Identifiers of all available devices, e.g. `["CPU", "GPU.0", "GPU.1"]`.
    pub fn available_devices(&self) -> Vec<String> {
        self.devices()
            .into_iter()
            .map(|device| device.id.to_string())
            .collect()
    }

    /// Full records of all available devices.
    ///
    /// A backend that fails is logged and contributes nothing.
    pub fn devices(&self) -> Vec<Device> {
        let mut devices = Vec::new();
        for backend in &self.backends {
            let descriptors = match backend.enumerate() {
                Ok(descriptors) => descriptors,
                Err(err) => {
                    warn!(backend = backend.name(), error = %err, "device backend failed; skipping");
                    continue;
                }
            };
            debug!(
                backend = backend.name(),
                count = descriptors.len(),
                "backend enumerated"
            );

            let kind = backend.kind();
            let single = descriptors.len() == 1;
            devices.extend(descriptors.into_iter().enumerate().map(|(index, descriptor)| {
                let id = if single {
                    DeviceId::bare(kind)
                } else {
                    DeviceId::indexed(kind, index)
                };
                Device::from_descriptor(id, descriptor)
            }));
        }
        devices
    }

    /// Look up one device.
    ///
    /// `GPU` resolves to `GPU.0` when several GPUs exist, and `GPU.0`
    /// resolves to `GPU` when there is only one.
    pub fn device(&self, id: &str) -> Result<Device, CoreError> {
        let wanted: DeviceId = id.parse()?;
        let devices = self.devices();

        if let Some(device) = devices.iter().find(|d| d.id == wanted) {
            return Ok(device.clone());
        }

        let alias = match wanted.index {
            None => DeviceId::indexed(wanted.kind, 0),
            Some(0) => DeviceId::bare(wanted.kind),
            Some(_) => return Err(CoreError::DeviceNotFound(wanted.to_string())),
        };
        devices
            .into_iter()
            .find(|d| d.id == alias)
            .ok_or_else(|| CoreError::DeviceNotFound(wanted.to_string()))
    }

    /// Read a single property of a device.
    pub fn property(&self, id: &str, name: &str) -> Result<String, CoreError> {
        let device = self.device(id)?;
        device
            .property(name)
            .map(str::to_string)
            .ok_or_else(|| CoreError::PropertyNotFound {
                device: device.id.to_string(),
                property: name.to_string(),
            })
    }
}
