use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod report;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::run(&cli);
    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    ExitCode::from(commands::exit_status(&result))
}
