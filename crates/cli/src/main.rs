// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hookprobe binary entry point.

use clap::Parser;

use hookprobe::cli::{Cli, CliError};
use hookprobe::{host, telemetry};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    telemetry::initialise(config.log_filter())?;
    if let Some(executable) = &config.host.executable {
        host::init(executable)?;
    }
    cli.command
        .execute(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
