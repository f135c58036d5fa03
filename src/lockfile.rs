//! Lockfile loading, merging, and atomic persistence.
//!
//! The lockfile is an open-ended JSON object owned by the project. Only
//! the `dependencies` field belongs to this tool; everything else passes
//! through a merge untouched.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PinError, PinResult};

/// Lockfile location relative to the invocation directory.
pub const LOCKFILE_PATH: &str = "component.json";

/// The on-disk lockfile document.
///
/// `dependencies` maps `owner/name` to a pinned version; the flattened
/// remainder holds whatever other top-level fields the project keeps in
/// its lockfile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockfileDocument {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Path to the lockfile under `root`.
pub fn lockfile_path(root: &Path) -> PathBuf {
    root.join(LOCKFILE_PATH)
}

/// Load the lockfile under `root`, if one exists.
///
/// A file that cannot be parsed as a JSON object is fatal
/// [`PinError::MalformedLockfile`]: merging into unknown data would risk
/// destroying it. The stale `dependencies` value gets replaced wholesale
/// on merge, so its shape is not validated here; a value that is not a
/// string-to-string map is simply dropped.
pub fn load_existing(root: &Path) -> PinResult<Option<LockfileDocument>> {
    let path = lockfile_path(root);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| PinError::MalformedLockfile {
        path: PathBuf::from(LOCKFILE_PATH),
        message: e.to_string(),
    })?;

    match value {
        Value::Object(mut extra) => {
            let dependencies = extra
                .remove("dependencies")
                .map(|deps| serde_json::from_value(deps).unwrap_or_default())
                .unwrap_or_default();
            Ok(Some(LockfileDocument { dependencies, extra }))
        }
        other => Err(PinError::MalformedLockfile {
            path: PathBuf::from(LOCKFILE_PATH),
            message: format!(
                "expected an object, found {}",
                crate::manifest::json_type_name(&other)
            ),
        }),
    }
}

/// Replace the document's `dependencies` with the pinned map.
///
/// The replacement is total, never a deep merge; all other fields are
/// kept as loaded. With no existing document the result contains only
/// `dependencies`.
pub fn merge(
    existing: Option<LockfileDocument>,
    dependencies: BTreeMap<String, String>,
) -> LockfileDocument {
    let mut document = existing.unwrap_or_default();
    document.dependencies = dependencies;
    document
}

/// Serialize `document` and persist it atomically under `root`.
///
/// Writes to a temporary file in the lockfile's directory, then renames
/// over the target, so a crash mid-write never truncates a previously
/// valid lockfile.
pub fn write(root: &Path, document: &LockfileDocument) -> PinResult<()> {
    let path = lockfile_path(root);
    let mut content = serde_json::to_string_pretty(document)
        .map_err(|e| PinError::Io(std::io::Error::other(e.to_string())))?;
    content.push('\n');

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(&path).map_err(|e| PinError::Io(e.error))?;
    Ok(())
}
