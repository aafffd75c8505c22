//! Command handlers.
//!
//! Handlers take the runtime core and an output sink; `run` dispatches a
//! parsed command to the right one.

pub mod list;
pub mod query;

use std::io::Write;

use devscan_core::Core;

use crate::commands::Commands;
use crate::error::CliError;

/// Dispatch a command. `None` means the default listing.
pub fn run<W: Write>(core: &Core, command: Option<Commands>, out: &mut W) -> Result<(), CliError> {
    match command.unwrap_or_default() {
        Commands::List { json } => list::execute(core, json, out),
        Commands::Query {
            device,
            property,
            json,
        } => query::execute(
            core,
            &query::QueryArgs {
                device: device.as_deref(),
                property: property.as_deref(),
                json,
            },
            out,
        ),
    }
}
