//! NPU backend over the Linux compute accelerator class (`class/accel`).

use std::path::{Path, PathBuf};

use devscan_core::{BackendError, DeviceBackend, DeviceDescriptor, DeviceKind};
use tracing::{debug, warn};

use crate::sysfs::{PciDevice, indexed_entries, read_uevent};

/// Kernel driver bound to Intel NPUs.
const NPU_DRIVER: &str = "intel_vpu";

/// Enumerates Intel NPUs through `<sysfs_root>/class/accel`.
#[derive(Debug, Clone)]
pub struct AccelNpuBackend {
    sysfs_root: PathBuf,
}

impl AccelNpuBackend {
    pub fn new(sysfs_root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
        }
    }
}

impl DeviceBackend for AccelNpuBackend {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Npu
    }

    fn name(&self) -> &'static str {
        "accel-npu"
    }

    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, BackendError> {
        let accel_dir = self.sysfs_root.join("class").join("accel");
        let mut devices = Vec::new();

        for (index, node) in indexed_entries(&accel_dir, "accel")? {
            match inspect_node(&node) {
                Ok(Some(descriptor)) => devices.push(descriptor),
                Ok(None) => debug!(accel = index, "accel node skipped"),
                Err(err) => warn!(accel = index, error = %err, "accel node unreadable; skipping"),
            }
        }

        Ok(devices)
    }
}

fn inspect_node(node: &Path) -> Result<Option<DeviceDescriptor>, BackendError> {
    let uevent_path = node.join("device").join("uevent");
    let Some(uevent) = read_uevent(&uevent_path)? else {
        return Ok(None);
    };
    if uevent.get("DRIVER").map(String::as_str) != Some(NPU_DRIVER) {
        return Ok(None);
    }

    let mut descriptor =
        DeviceDescriptor::new("Intel(R) AI Boost").with_property("DRIVER", NPU_DRIVER);
    if let Some(pci) = PciDevice::from_uevent(&uevent, &uevent_path)? {
        descriptor = descriptor.with_property("PCI_ID", pci.pci_id());
        if let Some(slot) = pci.slot {
            descriptor = descriptor.with_property("PCI_SLOT", slot);
        }
    }
    Ok(Some(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_intel_vpu_reported() {
        let root = tempfile::tempdir().unwrap();
        let dev = root.path().join("class/accel/accel0/device");
        fs::create_dir_all(&dev).unwrap();
        fs::write(
            dev.join("uevent"),
            "DRIVER=intel_vpu\nPCI_ID=8086:7D1D\nPCI_SLOT_NAME=0000:00:0b.0\n",
        )
        .unwrap();

        let other = root.path().join("class/accel/accel1/device");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("uevent"), "DRIVER=habanalabs\n").unwrap();

        let devices = AccelNpuBackend::new(root.path()).enumerate().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].full_name, "Intel(R) AI Boost");
        assert_eq!(
            devices[0].properties.get("PCI_ID").map(String::as_str),
            Some("8086:7d1d")
        );
    }

    #[test]
    fn test_malformed_node_does_not_hide_others() {
        let root = tempfile::tempdir().unwrap();
        let bad = root.path().join("class/accel/accel0/device");
        fs::create_dir_all(&bad).unwrap();
        fs::write(bad.join("uevent"), "DRIVER=intel_vpu\nPCI_ID=8086\n").unwrap();

        let good = root.path().join("class/accel/accel1/device");
        fs::create_dir_all(&good).unwrap();
        fs::write(good.join("uevent"), "DRIVER=intel_vpu\nPCI_ID=8086:643E\n").unwrap();

        assert!(matches!(
            inspect_node(&root.path().join("class/accel/accel0")),
            Err(BackendError::Parse { .. })
        ));

        let devices = AccelNpuBackend::new(root.path()).enumerate().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(
            devices[0].properties.get("PCI_ID").map(String::as_str),
            Some("8086:643e")
        );
    }

    #[test]
    fn test_missing_accel_class_is_empty() {
        let root = tempfile::tempdir().unwrap();
        assert!(AccelNpuBackend::new(root.path()).enumerate().unwrap().is_empty());
    }
}
