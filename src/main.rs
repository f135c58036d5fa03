//! Pinion CLI - dependency pinning for component-based builds
//!
//! Usage: pinion [-q|--quiet]
//!
//! Reads `components/resolved.json` from the current directory and writes
//! a pinned `component.json` next to it. Exits 0 on success, 1 on any
//! fatal condition.

use anyhow::{Context, Result};
use clap::Parser;

use pinion::cli::Cli;
use pinion::report::{report_error, ConsoleReporter, Reporter, SilentReporter};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = std::env::current_dir().context("unable to determine the current directory")?;

    let mut reporter: Box<dyn Reporter> = if cli.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::auto())
    };

    pinion::run(&root, reporter.as_mut())?;
    Ok(())
}
