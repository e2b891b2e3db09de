// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: CLI entry point for the msh interactive shell.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! CLI entry point for the msh interactive shell.

use std::io;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use msh::{Shell, SystemSpawner};

/// msh command-line arguments.
#[derive(Debug, Parser)]
#[command(author = "Lukas Bower", version, about = "Minimal interactive command shell", long_about = None)]
struct Cli {
    /// Prompt printed before each command line.
    #[arg(long, default_value = "msh> ")]
    prompt: String,

    /// Enable verbose diagnostic logging.
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut shell = Shell::new(SystemSpawner, io::stdout(), cli.prompt);
    if let Err(err) = shell.repl(stdin.lock()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
