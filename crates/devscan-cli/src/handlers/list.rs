//! List command handler.
//!
//! Prints the available device identifiers on a single line.

use std::io::Write;

use devscan_core::Core;
use tracing::debug;

use crate::error::CliError;
use crate::presentation::format_available_devices;

/// Execute the list command.
///
/// Writes `Available devices: [...]`, or a JSON array with `json`.
/// An empty device list is not an error.
pub fn execute<W: Write>(core: &Core, json: bool, out: &mut W) -> Result<(), CliError> {
    let devices = core.available_devices();
    debug!(count = devices.len(), "devices listed");

    if json {
        serde_json::to_writer(&mut *out, &devices)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", format_available_devices(&devices))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devscan_core::RuntimeConfig;

    fn cpu_only_core() -> Core {
        let config = RuntimeConfig::default().with_backend_list("cpu").unwrap();
        devscan_runtime::create_core(&config).unwrap()
    }

    #[test]
    fn test_plain_listing() {
        let mut out = Vec::new();
        execute(&cpu_only_core(), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Available devices: ['CPU']\n");
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        execute(&cpu_only_core(), true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\"CPU\"]\n");
    }

    #[test]
    fn test_empty_core() {
        let core = Core::new(Vec::new()).unwrap();
        let mut out = Vec::new();
        execute(&core, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Available devices: []\n");
    }
}
