//! GPU backend over the Linux DRM class in sysfs.
//!
//! Each `class/drm/cardN` node with an Intel PCI parent is one GPU. Other
//! vendors are skipped since the runtime has no execution path for them.

use std::path::{Path, PathBuf};

use devscan_core::{BackendError, DeviceBackend, DeviceDescriptor, DeviceKind};
use tracing::{debug, warn};

use crate::sysfs::{INTEL_VENDOR_ID, PciDevice, indexed_entries, read_uevent};

/// PCI slot conventionally used by Intel integrated graphics.
const INTEGRATED_GPU_SLOT: &str = "0000:00:02.0";

/// Enumerates Intel GPUs through `<sysfs_root>/class/drm`.
#[derive(Debug, Clone)]
pub struct DrmGpuBackend {
    sysfs_root: PathBuf,
}

impl DrmGpuBackend {
    pub fn new(sysfs_root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
        }
    }

    fn drm_dir(&self) -> PathBuf {
        self.sysfs_root.join("class").join("drm")
    }
}

impl DeviceBackend for DrmGpuBackend {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Gpu
    }

    fn name(&self) -> &'static str {
        "drm-gpu"
    }

    fn enumerate(&self) -> Result<Vec<DeviceDescriptor>, BackendError> {
        let mut devices = Vec::new();
        for (index, card) in indexed_entries(&self.drm_dir(), "card")? {
            match inspect_card(&card) {
                Ok(Some(descriptor)) => devices.push(descriptor),
                Ok(None) => debug!(card = index, "drm card skipped"),
                Err(err) => warn!(card = index, error = %err, "drm card unreadable; skipping"),
            }
        }
        Ok(devices)
    }
}

fn inspect_card(card: &Path) -> Result<Option<DeviceDescriptor>, BackendError> {
    let uevent_path = card.join("device").join("uevent");
    let Some(uevent) = read_uevent(&uevent_path)? else {
        return Ok(None);
    };
    let Some(pci) = PciDevice::from_uevent(&uevent, &uevent_path)? else {
        return Ok(None);
    };
    if pci.vendor != INTEL_VENDOR_ID {
        return Ok(None);
    }
    Ok(Some(gpu_descriptor(&pci)))
}

fn gpu_descriptor(pci: &PciDevice) -> DeviceDescriptor {
    let integrated = pci.slot.as_deref() == Some(INTEGRATED_GPU_SLOT);
    let (device_type, suffix) = if integrated {
        ("integrated", "iGPU")
    } else {
        ("discrete", "dGPU")
    };

    let mut descriptor = DeviceDescriptor::new(format!(
        "Intel(R) Graphics [0x{:04x}] ({suffix})",
        pci.device
    ))
    .with_property("DEVICE_TYPE", device_type)
    .with_property("PCI_ID", pci.pci_id());
    if let Some(slot) = &pci.slot {
        descriptor = descriptor.with_property("PCI_SLOT", slot.as_str());
    }
    if let Some(driver) = &pci.driver {
        descriptor = descriptor.with_property("DRIVER", driver.as_str());
    }
    descriptor
}
