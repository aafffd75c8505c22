//! Query command handler.
//!
//! Shows device properties, either for every device or for one.

use std::io::Write;

use devscan_core::Core;

use crate::error::CliError;
use crate::presentation::write_device;

/// Arguments for the query command.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryArgs<'a> {
    pub device: Option<&'a str>,
    pub property: Option<&'a str>,
    pub json: bool,
}

/// Execute the query command.
pub fn execute<W: Write>(core: &Core, args: &QueryArgs<'_>, out: &mut W) -> Result<(), CliError> {
    if let (Some(id), Some(property)) = (args.device, args.property) {
        writeln!(out, "{}", core.property(id, property)?)?;
        return Ok(());
    }

    if let Some(id) = args.device {
        let device = core.device(id)?;
        if args.json {
            serde_json::to_writer_pretty(&mut *out, &device)?;
            writeln!(out)?;
        } else {
            write_device(out, &device)?;
        }
        return Ok(());
    }

    let devices = core.devices();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &devices)?;
        writeln!(out)?;
        return Ok(());
    }

    if devices.is_empty() {
        writeln!(out, "No devices available.")?;
        return Ok(());
    }

    for (i, device) in devices.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_device(out, device)?;
    }
    Ok(())
}
