//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: logging, configuration layering (environment, then flags)
//! and the runtime core with its probing backends.

use devscan_core::{Core, RuntimeConfig};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Fully composed context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    /// The runtime core handle.
    pub core: Core,
    /// Configuration the core was built from.
    pub config: RuntimeConfig,
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries command output. `RUST_LOG`
/// wins unless `--verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer CLI flags over a base configuration (normally from the environment).
pub fn apply_flags(cli: &Cli, base: RuntimeConfig) -> Result<RuntimeConfig, CliError> {
    let mut config = base;
    if let Some(root) = &cli.sysfs_root {
        config = config.with_sysfs_root(root)?;
    }
    if let Some(list) = &cli.backends {
        config = config.with_backend_list(list)?;
    }
    Ok(config)
}

/// Build the CLI context from parsed arguments and the process environment.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let config = apply_flags(cli, RuntimeConfig::from_env()?)?;
    context_from_config(config)
}

/// Build the CLI context from an already resolved configuration.
pub fn context_from_config(config: RuntimeConfig) -> Result<CliContext, CliError> {
    let core = devscan_runtime::create_core(&config)?;
    Ok(CliContext { core, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use devscan_core::DeviceKind;
    use std::path::PathBuf;

    fn env_config(pairs: &[(&str, &str)]) -> RuntimeConfig {
        RuntimeConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_flags_override_env() {
        let cli = Cli::parse_from(["devscan", "--backends", "cpu", "--sysfs-root", "/flag/sys"]);
        let base = env_config(&[
            ("DEVSCAN_BACKENDS", "gpu,npu"),
            ("DEVSCAN_SYSFS_ROOT", "/env/sys"),
        ]);
        let config = apply_flags(&cli, base).unwrap();
        assert_eq!(config.backends, vec![DeviceKind::Cpu]);
        assert_eq!(config.sysfs_root, PathBuf::from("/flag/sys"));
    }

    #[test]
    fn test_env_used_without_flags() {
        let cli = Cli::parse_from(["devscan"]);
        let config = apply_flags(&cli, env_config(&[("DEVSCAN_BACKENDS", "npu")])).unwrap();
        assert_eq!(config.backends, vec![DeviceKind::Npu]);
        assert_eq!(config.sysfs_root, PathBuf::from("/sys"));
    }

    #[test]
    fn test_bad_backend_is_config_error() {
        let cli = Cli::parse_from(["devscan", "--backends", "cpu,fpga"]);
        let err = apply_flags(&cli, RuntimeConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_context_from_config() {
        let config = RuntimeConfig::default().with_backend_list("cpu").unwrap();
        let ctx = context_from_config(config).unwrap();
        assert_eq!(ctx.core.backend_kinds(), vec![DeviceKind::Cpu]);
    }
}
