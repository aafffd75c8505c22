//! Host probing backends for devscan.
//!
//! This crate implements the `DeviceBackend` port from `devscan-core`:
//! the CPU via `sysinfo`, and Intel GPUs and NPUs via Linux sysfs.
//! Use [`create_core`] to get a runtime core wired with all of them.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod cpu;
mod factory;
pub mod gpu;
pub mod npu;
pub mod sysfs;

pub use cpu::CpuBackend;
pub use factory::{create_core, default_backends};
pub use gpu::DrmGpuBackend;
pub use npu::AccelNpuBackend;
