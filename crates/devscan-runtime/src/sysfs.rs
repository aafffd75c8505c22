//! Small helpers for reading Linux sysfs.
//!
//! Everything takes explicit paths so tests can point the backends at a
//! temporary directory tree.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use devscan_core::BackendError;
use tracing::debug;

/// PCI vendor id for Intel.
pub const INTEL_VENDOR_ID: u16 = 0x8086;

/// Parse a `uevent` file body (`KEY=VALUE` per line).
///
/// Lines without `=` are ignored.
pub fn parse_uevent(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Read and parse a `uevent` file. A missing file yields `None`.
pub fn read_uevent(path: &Path) -> Result<Option<BTreeMap<String, String>>, BackendError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(parse_uevent(&text))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(BackendError::io(path, err)),
    }
}

/// Parse a `PCI_ID` value such as `8086:56A0` into `(vendor, device)`.
pub fn parse_pci_id(value: &str) -> Option<(u16, u16)> {
    let (vendor, device) = value.trim().split_once(':')?;
    let vendor = u16::from_str_radix(vendor, 16).ok()?;
    let device = u16::from_str_radix(device, 16).ok()?;
    Some((vendor, device))
}

/// List `<prefix><N>` entries of `dir`, sorted by `N`.
///
/// Entries with anything after the number (`card0-DP-1`) are skipped.
/// A missing directory is an empty listing.
pub fn indexed_entries(dir: &Path, prefix: &str) -> Result<Vec<(u32, PathBuf)>, BackendError> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(BackendError::io(dir, err)),
    };

    let mut entries: Vec<(u32, PathBuf)> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "unreadable sysfs entry skipped");
                None
            }
        })
        .filter_map(|entry| {
            let name = entry.file_name();
            let index = name
                .to_str()?
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))?
                .parse::<u32>()
                .ok()?;
            Some((index, entry.path()))
        })
        .collect();
    entries.sort_by_key(|(index, _)| *index);
    Ok(entries)
}

/// PCI identity of a device node, as read from its `device/uevent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PciDevice {
    pub vendor: u16,
    pub device: u16,
    pub slot: Option<String>,
    pub driver: Option<String>,
}

impl PciDevice {
    /// Build from a parsed uevent read from `path`.
    ///
    /// Returns `Ok(None)` for non-PCI devices (no `PCI_ID` key) and a parse
    /// error when `PCI_ID` is present but malformed.
    pub fn from_uevent(
        uevent: &BTreeMap<String, String>,
        path: &Path,
    ) -> Result<Option<Self>, BackendError> {
        let Some(raw) = uevent.get("PCI_ID") else {
            return Ok(None);
        };
        let (vendor, device) = parse_pci_id(raw)
            .ok_or_else(|| BackendError::parse(path, format!("malformed PCI_ID '{raw}'")))?;
        Ok(Some(Self {
            vendor,
            device,
            slot: uevent.get("PCI_SLOT_NAME").cloned(),
            driver: uevent.get("DRIVER").cloned(),
        }))
    }

    /// `8086:56a0` form.
    pub fn pci_id(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor, self.device)
    }
}
