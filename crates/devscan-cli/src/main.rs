//! CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use devscan_cli::{Cli, CliError, bootstrap, handlers, init_logging};

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&cli).context("Failed to initialize the runtime core")?;
    tracing::debug!(config = ?ctx.config, "runtime core ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handlers::run(&ctx.core, cli.command, &mut out)?;
    out.flush().map_err(CliError::from)?;
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables; existing ones take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
