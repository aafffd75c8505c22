//! Output formatting shared by handlers.

mod device_list;
mod device_table;

pub use device_list::{format_available_devices, sequence_repr, string_repr};
pub use device_table::write_device;
