//! The pinning pipeline.
//!
//! Load manifest, reduce first-wins, sort, merge into the existing
//! lockfile, write atomically. Strictly sequential; the first fatal
//! condition aborts the run before any destructive write happens.

use std::path::Path;

use crate::error::PinResult;
use crate::report::Reporter;
use crate::{lockfile, manifest, pin};

/// What a successful run did, for callers that want to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSummary {
    pub pinned: usize,
    pub duplicates: usize,
}

/// Run the whole pipeline with `root` as the invocation directory.
pub fn run(root: &Path, reporter: &mut dyn Reporter) -> PinResult<PinSummary> {
    reporter.reading(manifest::MANIFEST_PATH);
    let manifest = manifest::load(root)?;

    let reduction = pin::reduce(&manifest, reporter)?;
    let duplicates = reduction.duplicates.len();
    let dependencies = pin::canonicalize(reduction.pins);

    // Load before write: an unparseable lockfile must abort the run
    // while the previous file is still intact on disk.
    let existing = lockfile::load_existing(root)?;
    let document = lockfile::merge(existing, dependencies);

    reporter.writing(document.dependencies.len(), lockfile::LOCKFILE_PATH);
    lockfile::write(root, &document)?;

    Ok(PinSummary {
        pinned: document.dependencies.len(),
        duplicates,
    })
}
