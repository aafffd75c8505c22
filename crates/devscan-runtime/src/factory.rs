//! Composition of the default backends into a runtime core.

use devscan_core::{Core, CoreError, DeviceBackend, DeviceKind, RuntimeConfig};
use tracing::debug;

use crate::cpu::CpuBackend;
use crate::gpu::DrmGpuBackend;
use crate::npu::AccelNpuBackend;

/// Instantiate the backends enabled in `config`, in configured order.
pub fn default_backends(config: &RuntimeConfig) -> Vec<Box<dyn DeviceBackend>> {
    config
        .backends
        .iter()
        .map(|kind| -> Box<dyn DeviceBackend> {
            match kind {
                DeviceKind::Cpu => Box::new(CpuBackend::new()),
                DeviceKind::Gpu => Box::new(DrmGpuBackend::new(&config.sysfs_root)),
                DeviceKind::Npu => Box::new(AccelNpuBackend::new(&config.sysfs_root)),
            }
        })
        .collect()
}

/// Acquire a runtime core with the default backends.
pub fn create_core(config: &RuntimeConfig) -> Result<Core, CoreError> {
    debug!(sysfs_root = %config.sysfs_root.display(), backends = ?config.backends, "creating runtime core");
    Core::new(default_backends(config))
}
