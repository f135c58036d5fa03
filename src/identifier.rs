//! Dependency identifier parsing.
//!
//! Manifest keys look like `components/owner-name@version/subpath`. The
//! second `/` segment carries everything we need: a hyphenated owner-name
//! slug and a version, separated by `@`.

use crate::error::{PinError, PinResult};

/// A parsed dependency identifier.
///
/// `component` is the canonical `owner/name` path; `version` is whatever
/// version or ref string the resolve step recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyIdentifier {
    pub component: String,
    pub version: String,
}

/// Parse a raw manifest key into a [`DependencyIdentifier`].
///
/// The owner is the first hyphen-delimited token of the slug; the rest,
/// rejoined with `-`, is the name. Owners therefore cannot contain a
/// hyphen, while names may (`acme-my-lib@2.0.0` -> `acme/my-lib`).
///
/// A key without a second segment or without `@` in that segment is a
/// malformed-manifest condition and fails fast rather than pinning an
/// incomplete identifier.
pub fn parse(key: &str) -> PinResult<DependencyIdentifier> {
    let segment = key
        .split('/')
        .nth(1)
        .ok_or_else(|| malformed(key, "expected at least two '/'-separated segments"))?;

    let parts: Vec<&str> = segment.split('@').collect();
    if parts.len() < 2 {
        return Err(malformed(key, "missing '@version'"));
    }
    let (slug, version) = (parts[0], parts[1]);

    let mut tokens = slug.split('-');
    // split always yields at least one (possibly empty) token
    let owner = tokens.next().unwrap_or_default();
    let name = tokens.collect::<Vec<_>>().join("-");

    Ok(DependencyIdentifier {
        component: format!("{}/{}", owner, name),
        version: version.to_string(),
    })
}

fn malformed(key: &str, reason: &str) -> PinError {
    PinError::MalformedIdentifier {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
