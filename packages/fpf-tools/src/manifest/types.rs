//! Manifest data model and parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FpfError, Result};

/// Where before/after statistics are measured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineRef {
    /// A full document; its line count is the baseline.
    Document(String),
    /// Another manifest; its parts are summed and bound the allowed parts.
    Manifest(String),
}

impl BaselineRef {
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            BaselineRef::Document(r) | BaselineRef::Manifest(r) => r,
        }
    }
}

/// A validated assembly manifest.
///
/// References are kept as written; resolving them is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyManifest {
    pub output: String,
    /// Part references in concatenation order.
    pub parts: Vec<String>,
    pub baseline: Option<BaselineRef>,
}

/// Manifest written by `split`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitManifest {
    /// Default reassembly target, so the manifest can be assembled directly.
    pub output: String,
    /// Part file names, Preface first.
    pub parts: Vec<String>,
    /// The document the parts were split from.
    pub baseline_file: String,
}

/// Recognised keys; anything else in the mapping is ignored.
#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(alias = "output_file")]
    output: Option<String>,
    parts: Option<Vec<String>>,
    baseline_file: Option<String>,
    baseline_manifest: Option<String>,
}

fn parse_raw(text: &str, origin: &Path) -> Result<RawManifest> {
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(text).map_err(|e| FpfError::malformed(origin, e.to_string()))?;

    if !value.is_mapping() {
        return Err(FpfError::malformed(origin, "top level is not a mapping"));
    }

    serde_yaml_ng::from_value(value).map_err(|e| FpfError::malformed(origin, e.to_string()))
}

/// Parse an assembly manifest. `origin` is only used in error messages.
pub fn parse_manifest(text: &str, origin: &Path) -> Result<AssemblyManifest> {
    let raw = parse_raw(text, origin)?;

    let output = raw
        .output
        .filter(|o| !o.trim().is_empty())
        .ok_or_else(|| FpfError::malformed(origin, "missing required field `output`"))?;
    let parts = raw
        .parts
        .ok_or_else(|| FpfError::malformed(origin, "missing required field `parts`"))?;

    let baseline = match (raw.baseline_file, raw.baseline_manifest) {
        (Some(_), Some(_)) => {
            return Err(FpfError::malformed(
                origin,
                "`baseline_file` and `baseline_manifest` are mutually exclusive",
            ))
        }
        (Some(file), None) => Some(BaselineRef::Document(file)),
        (None, Some(manifest)) => Some(BaselineRef::Manifest(manifest)),
        (None, None) => None,
    };

    Ok(AssemblyManifest {
        output,
        parts,
        baseline,
    })
}

/// Parse only the part list of a manifest (used for baseline manifests).
pub fn parse_part_list(text: &str, origin: &Path) -> Result<Vec<String>> {
    parse_raw(text, origin)?
        .parts
        .ok_or_else(|| FpfError::malformed(origin, "missing required field `parts`"))
}
