//! Pin reduction and canonical ordering.
//!
//! The resolve step may list the same logical dependency several times at
//! different versions (transitive inclusion). Reduction flattens those
//! into one authoritative version per component: the first occurrence
//! wins, later ones are reported as duplicates and otherwise ignored. No
//! semantic-version comparison happens here.

use std::collections::{BTreeMap, HashMap};

use crate::error::PinResult;
use crate::identifier;
use crate::manifest::Manifest;
use crate::report::Reporter;

/// Keys under this prefix are remote dependencies eligible for pinning;
/// everything else is a local/linked component and is skipped.
pub const REMOTE_PREFIX: &str = "components";

/// A component that was already pinned when seen again. Informational
/// only; never written to the lockfile, never affects the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRecord {
    pub component: String,
    pub version: String,
}

/// Output of [`reduce`]: the deduplicated pins plus the duplicates seen
/// along the way.
#[derive(Debug, Default)]
pub struct Reduction {
    pub pins: HashMap<String, String>,
    pub duplicates: Vec<DuplicateRecord>,
}

/// Reduce the manifest into a first-wins pinned map.
///
/// Iterates in the manifest's own enumeration order. That order is stable
/// for a given input but carries no meaning; the canonical sort erases it
/// before anything reaches disk.
pub fn reduce(manifest: &Manifest, reporter: &mut dyn Reporter) -> PinResult<Reduction> {
    let mut pins = HashMap::new();
    let mut duplicates = Vec::new();

    for key in manifest.keys() {
        if !key.starts_with(REMOTE_PREFIX) {
            continue;
        }

        let id = identifier::parse(key)?;
        if pins.contains_key(&id.component) {
            reporter.dupe(&id.component, &id.version);
            duplicates.push(DuplicateRecord {
                component: id.component,
                version: id.version,
            });
        } else {
            reporter.pin(&id.component, &id.version);
            pins.insert(id.component, id.version);
        }
    }

    Ok(Reduction { pins, duplicates })
}

/// Order pins by component, byte-lexicographically.
///
/// Re-running on a semantically identical manifest then serializes to
/// byte-identical output, keeping version-control diffs clean.
pub fn canonicalize(pins: HashMap<String, String>) -> BTreeMap<String, String> {
    pins.into_iter().collect()
}
