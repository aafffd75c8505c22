//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for devscan.
///
/// Running without a subcommand behaves like `devscan list`.
#[derive(Parser, Debug)]
#[command(name = "devscan")]
#[command(about = "List the compute devices available for inference")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Scan this sysfs tree instead of /sys (overrides DEVSCAN_SYSFS_ROOT)
    #[arg(long = "sysfs-root", global = true, value_name = "PATH")]
    pub sysfs_root: Option<PathBuf>,

    /// Comma-separated backends to enable, e.g. "cpu,gpu" (overrides DEVSCAN_BACKENDS)
    #[arg(long = "backends", global = true, value_name = "LIST")]
    pub backends: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["devscan"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "devscan",
            "list",
            "--verbose",
            "--sysfs-root",
            "/tmp/sys",
            "--backends",
            "cpu,npu",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.sysfs_root, Some(PathBuf::from("/tmp/sys")));
        assert_eq!(cli.backends.as_deref(), Some("cpu,npu"));
    }
}
