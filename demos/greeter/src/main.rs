//! Greeter entry-point: parse options, set up logging, render the page.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use greeter::app::run;
use greeter::cli::GreeterCli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = GreeterCli::parse();
    let mut stdout = io::stdout().lock();
    run(&cli, &mut stdout).map_err(color_eyre::eyre::Report::from)
}
