use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use allium_cli::args::CliArgs;
use allium_cli::driver;
use allium_cli::reporter::Reporter;
use allium_cli::tracing_config::{LogSettings, init_tracing};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&LogSettings::from_args(&args));

    let stdout = std::io::stdout();
    let reporter = Reporter::new(!args.no_color && stdout.is_terminal());

    let mut out = stdout.lock();
    let status = driver::run(&args, &reporter, &mut out)?;
    out.flush()?;

    if status != driver::EXIT_SUCCESS {
        std::process::exit(status);
    }
    Ok(())
}
