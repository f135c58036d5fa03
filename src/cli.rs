use clap::Parser;

/// Pinion - dependency pinning for component-based builds
///
/// Reads the resolved manifest at `components/resolved.json` and writes a
/// version-pinned `component.json` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "pinion")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Suppress informational output (errors still print)
    #[arg(short, long)]
    pub quiet: bool,
}
