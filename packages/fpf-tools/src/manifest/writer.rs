//! YAML output for split manifests.

use std::path::Path;

use super::types::SplitManifest;
use crate::error::Result;
use crate::fs_util::write_atomic;

/// Push top-level `- ` items two spaces under their key.
///
/// serde_yaml_ng writes a sequence flush with the key that owns it. Split
/// manifests are flat mappings, so only column-zero items move.
fn indent_sequence_items(yaml: &str) -> String {
    yaml.lines()
        .map(|line| {
            if line.starts_with("- ") {
                format!("  {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a split manifest as YAML with a document start marker.
pub fn generate_manifest_yaml(manifest: &SplitManifest) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(manifest)?;
    let yaml = indent_sequence_items(&yaml);

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Write a split manifest to `path`.
pub fn save_split_manifest(manifest: &SplitManifest, path: &Path) -> Result<()> {
    let content = generate_manifest_yaml(manifest)?;
    write_atomic(path, content.as_bytes())
}
