//! Host CPU backend.

use devscan_core::{BackendError, DeviceBackend, DeviceDescriptor, DeviceKind};
use sysinfo::System;
use tracing::debug;

/// Reports the host CPU as a single device.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuBackend;

impl CpuBackend {
    pub const fn new() -> Self {
        Self
    }
}

impl DeviceBackend for CpuBackend {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Cpu
    }

    fn name(&self) -> &'static str {
        "cpu"
    }

    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, BackendError> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let cpus = sys.cpus();
        let (brand, vendor) = cpus
            .first()
            .map(|cpu| (cpu.brand().to_string(), cpu.vendor_id().to_string()))
            .unwrap_or_default();
        debug!(brand = %brand, logical = cpus.len(), "cpu detected");

        Ok(vec![cpu_descriptor(&brand, &vendor, cpus.len())])
    }
}

/// Build the CPU descriptor from detected values.
///
/// A blank brand string falls back to `"CPU"`.
pub fn cpu_descriptor(brand: &str, vendor: &str, logical_cores: usize) -> DeviceDescriptor {
    let brand = brand.trim();
    let full_name = if brand.is_empty() { "CPU" } else { brand };

    let mut descriptor = DeviceDescriptor::new(full_name)
        .with_property("ARCHITECTURE", std::env::consts::ARCH)
        .with_property("AVAILABLE_CORES", logical_cores.max(1).to_string());
    let vendor = vendor.trim();
    if !vendor.is_empty() {
        descriptor = descriptor.with_property("VENDOR", vendor);
    }
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_backend_reports_one_device() {
        let devices = CpuBackend::new().enumerate().unwrap();
        assert_eq!(devices.len(), 1);
        assert!(!devices[0].full_name.is_empty());
        assert!(devices[0].properties.contains_key("AVAILABLE_CORES"));
    }

    #[test]
    fn test_blank_brand_falls_back() {
        let descriptor = cpu_descriptor("  ", "", 0);
        assert_eq!(descriptor.full_name, "CPU");
        assert_eq!(
            descriptor.properties.get("AVAILABLE_CORES").map(String::as_str),
            Some("1")
        );
        assert!(!descriptor.properties.contains_key("VENDOR"));
    }

    #[test]
    fn test_brand_and_vendor_kept() {
        let descriptor = cpu_descriptor("Intel(R) Core(TM) Ultra 7 155H", "GenuineIntel", 22);
        assert_eq!(descriptor.full_name, "Intel(R) Core(TM) Ultra 7 155H");
        assert_eq!(
            descriptor.properties.get("VENDOR").map(String::as_str),
            Some("GenuineIntel")
        );
        assert_eq!(
            descriptor.properties.get("AVAILABLE_CORES").map(String::as_str),
            Some("22")
        );
    }
}
