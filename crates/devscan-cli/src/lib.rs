//! CLI interface for devscan.
//!
//! The binary in `main.rs` only parses arguments and reports errors; the
//! composition root, handlers and presentation live here so they can be
//! tested directly.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only the integration tests spawn the binary against temporary trees
#[cfg(test)]
use tempfile as _;

// Dependencies used by the binary entry point
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
