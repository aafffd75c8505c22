//! Pure domain types.

mod device;

pub use device::{
    Device, DeviceDescriptor, DeviceId, DeviceIdError, DeviceKind, FULL_DEVICE_NAME,
};
