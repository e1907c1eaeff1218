//! Manifests: the YAML documents that order part files.
//!
//! `split` writes a [`SplitManifest`]; `assemble` reads an
//! [`AssemblyManifest`]. A split manifest is itself a valid assembly manifest.

mod types;
mod writer;

use std::path::Path;

use crate::error::Result;
use crate::fs_util::read_text;

pub use types::{parse_manifest, parse_part_list, AssemblyManifest, BaselineRef, SplitManifest};
pub use writer::{generate_manifest_yaml, save_split_manifest};

/// Read and validate an assembly manifest from disk.
pub fn load_manifest(path: &Path) -> Result<AssemblyManifest> {
    let text = read_text("Manifest", path)?;
    parse_manifest(&text, path)
}
