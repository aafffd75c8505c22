//! Text rendering of device properties for `devscan query`.

use std::io::{self, Write};

use devscan_core::{Device, FULL_DEVICE_NAME};

/// Write one device block:
///
/// ```text
/// GPU.0
///     FULL_DEVICE_NAME : Intel(R) Graphics [0x7d55] (iGPU)
///     DEVICE_TYPE : integrated
/// ```
pub fn write_device<W: Write>(out: &mut W, device: &Device) -> io::Result<()> {
    writeln!(out, "{}", device.id)?;
    writeln!(out, "    {FULL_DEVICE_NAME} : {}", device.full_name)?;
    for (key, value) in &device.properties {
        writeln!(out, "    {key} : {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_block() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "id": "GPU.0",
            "full_name": "Intel(R) Graphics [0x7d55] (iGPU)",
            "properties": { "DEVICE_TYPE": "integrated", "DRIVER": "i915" }
        }))
        .unwrap();

        let mut out = Vec::new();
        write_device(&mut out, &device).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GPU.0\n    FULL_DEVICE_NAME : Intel(R) Graphics [0x7d55] (iGPU)\n    DEVICE_TYPE : integrated\n    DRIVER : i915\n"
        );
    }
}
