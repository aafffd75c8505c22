//! Device domain types.
//!
//! A backend reports [`DeviceDescriptor`]s; the runtime core turns them
//! into [`Device`]s by assigning each one a [`DeviceId`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property key every device exposes.
pub const FULL_DEVICE_NAME: &str = "FULL_DEVICE_NAME";

/// Class of compute target.
///
/// Variant order is the canonical listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceKind {
    Cpu,
    Gpu,
    Npu,
}

impl DeviceKind {
    /// All kinds, in canonical order.
    pub const ALL: [Self; 3] = [Self::Cpu, Self::Gpu, Self::Npu];

    /// Canonical upper-case name (`"CPU"`, `"GPU"`, `"NPU"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Npu => "NPU",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a device kind or identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceIdError {
    #[error("device identifier is empty")]
    Empty,

    #[error("unknown device kind '{0}' (expected CPU, GPU or NPU)")]
    UnknownKind(String),

    #[error("invalid device index '{index}' in '{id}'")]
    InvalidIndex { id: String, index: String },
}

impl FromStr for DeviceKind {
    type Err = DeviceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DeviceIdError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DeviceIdError::UnknownKind(trimmed.to_string()))
    }
}

/// Identifier of a device within one enumeration, e.g. `CPU` or `GPU.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId {
    pub kind: DeviceKind,
    pub index: Option<usize>,
}

impl DeviceId {
    /// Identifier without an index (`GPU`).
    pub const fn bare(kind: DeviceKind) -> Self {
        Self { kind, index: None }
    }

    /// Identifier with an index (`GPU.0`).
    pub const fn indexed(kind: DeviceKind, index: usize) -> Self {
        Self {
            kind,
            index: Some(index),
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}.{index}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl FromStr for DeviceId {
    type Err = DeviceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('.') {
            Some((kind, index)) => {
                let kind = kind.parse::<DeviceKind>()?;
                let invalid = || DeviceIdError::InvalidIndex {
                    id: trimmed.to_string(),
                    index: index.to_string(),
                };
                if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let index = index.parse::<usize>().map_err(|_| invalid())?;
                Ok(Self::indexed(kind, index))
            }
            None => Ok(Self::bare(trimmed.parse::<DeviceKind>()?)),
        }
    }
}

impl Serialize for DeviceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// What a backend knows about one physical device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// Human-readable device name (e.g. the CPU brand string).
    pub full_name: String,
    /// Extra string properties, keyed by upper-case property name.
    pub properties: BTreeMap<String, String>,
}

impl DeviceDescriptor {
    /// Create a descriptor with no extra properties.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Attach a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A device as exposed by the runtime core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub full_name: String,
    pub properties: BTreeMap<String, String>,
}

impl Device {
    pub(crate) fn from_descriptor(id: DeviceId, descriptor: DeviceDescriptor) -> Self {
        Self {
            id,
            full_name: descriptor.full_name,
            properties: descriptor.properties,
        }
    }

    /// Look up a property by name. `FULL_DEVICE_NAME` is always present.
    pub fn property(&self, name: &str) -> Option<&str> {
        if name == FULL_DEVICE_NAME {
            return Some(&self.full_name);
        }
        self.properties.get(name).map(String::as_str)
    }
}
