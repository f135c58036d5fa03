//! Progress reporting.
//!
//! The pipeline never talks to stderr directly; it emits events through a
//! [`Reporter`] chosen at startup. Quiet mode swaps in the no-op
//! implementation instead of toggling global state.

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// Sink for the pipeline's informational events.
///
/// Events carry no data back into the pipeline; they exist only for the
/// human watching the run.
pub trait Reporter {
    /// About to load the manifest at `path`.
    fn reading(&mut self, path: &str);

    /// `component` was pinned at `version`.
    fn pin(&mut self, component: &str, version: &str);

    /// `component` appeared again; the earlier pin is kept.
    fn dupe(&mut self, component: &str, version: &str);

    /// About to write `count` pinned dependencies to `path`.
    fn writing(&mut self, count: usize, path: &str);
}

/// Reporter that prints tagged lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    /// Create a reporter, enabling color when stderr is a terminal.
    pub fn auto() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self { color: false }
    }

    fn emit(&self, label: &str, color: Color, message: &str) {
        // Pad before coloring so escape codes don't eat the alignment.
        let tag = format!("{:>9}", label);
        if self.color {
            eprintln!("{} : {}", tag.with(color), message);
        } else {
            eprintln!("{} : {}", tag, message);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn reading(&mut self, path: &str) {
        self.emit("reading", Color::Cyan, path);
    }

    fn pin(&mut self, component: &str, version: &str) {
        self.emit("pin", Color::Cyan, &format!("{}@{}", component, version));
    }

    fn dupe(&mut self, component: &str, version: &str) {
        self.emit("dupe", Color::Yellow, &format!("{}@{}", component, version));
    }

    fn writing(&mut self, count: usize, path: &str) {
        let noun = if count == 1 { "dependency" } else { "dependencies" };
        self.emit("writing", Color::Cyan, &format!("{} {} to {}", count, noun, path));
    }
}

/// Reporter that drops every event (quiet mode).
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn reading(&mut self, _path: &str) {}
    fn pin(&mut self, _component: &str, _version: &str) {}
    fn dupe(&mut self, _component: &str, _version: &str) {}
    fn writing(&mut self, _count: usize, _path: &str) {}
}

/// Print a fatal diagnostic. Not routed through [`Reporter`]: errors print
/// even in quiet mode.
pub fn report_error(message: &str) {
    let tag = format!("{:>9}", "error");
    if std::io::stderr().is_terminal() {
        eprintln!("{} : {}", tag.with(Color::Red), message);
    } else {
        eprintln!("{} : {}", tag, message);
    }
}

/// Reporter that records events as strings, for asserting in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn reading(&mut self, path: &str) {
        self.events.push(format!("reading {}", path));
    }

    fn pin(&mut self, component: &str, version: &str) {
        self.events.push(format!("pin {}@{}", component, version));
    }

    fn dupe(&mut self, component: &str, version: &str) {
        self.events.push(format!("dupe {}@{}", component, version));
    }

    fn writing(&mut self, count: usize, path: &str) {
        self.events.push(format!("writing {} to {}", count, path));
    }
}
