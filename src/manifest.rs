//! Resolved-manifest loading.
//!
//! The resolve step leaves a flat JSON object at `components/resolved.json`
//! mapping component paths to per-entry metadata. Only the keys are
//! interpreted here; the metadata is opaque.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{PinError, PinResult};

/// Manifest location relative to the invocation directory.
pub const MANIFEST_PATH: &str = "components/resolved.json";

/// The resolved-dependency manifest: component path -> opaque metadata.
pub type Manifest = Map<String, Value>;

/// Path to the manifest under `root`.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_PATH)
}

/// Load and parse the manifest under `root`.
///
/// A missing file is [`PinError::MissingManifest`] (the user has not run
/// the resolve step); a file that is not a JSON object is
/// [`PinError::ManifestParse`]. Both are fatal.
pub fn load(root: &Path) -> PinResult<Manifest> {
    let path = manifest_path(root);
    if !path.exists() {
        return Err(PinError::MissingManifest {
            path: PathBuf::from(MANIFEST_PATH),
        });
    }

    let content = std::fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| PinError::ManifestParse {
        path: PathBuf::from(MANIFEST_PATH),
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(PinError::ManifestParse {
            path: PathBuf::from(MANIFEST_PATH),
            message: format!("expected an object, found {}", json_type_name(&other)),
        }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
