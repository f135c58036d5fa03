//! Pinion - dependency pinning for component-based builds
//!
//! Pinion reads the resolved-dependency manifest left by the resolve step
//! and derives a flattened, deduplicated, version-pinned lockfile with
//! deterministic ordering, merged non-destructively into any existing
//! `component.json`.

pub mod cli;
pub mod error;
pub mod identifier;
pub mod lockfile;
pub mod manifest;
pub mod pin;
pub mod pipeline;
pub mod report;

// Re-exports for convenience
pub use error::{PinError, PinResult};
pub use identifier::DependencyIdentifier;
pub use lockfile::LockfileDocument;
pub use pipeline::{run, PinSummary};
pub use report::{ConsoleReporter, Reporter, SilentReporter};
