//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the available device identifiers (default)
    List {
        /// Print a JSON array instead of the plain listing
        #[arg(long)]
        json: bool,
    },

    /// Show the properties of one or all devices
    Query {
        /// Device identifier, e.g. CPU or GPU.1 (all devices when omitted)
        device: Option<String>,
        /// Print only this property (requires DEVICE)
        #[arg(short, long, requires = "device")]
        property: Option<String>,
        /// Print JSON records instead of text
        #[arg(long, conflicts_with = "property")]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::List { json: false }
    }
}
