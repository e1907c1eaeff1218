//! Writing split parts and their manifest to disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::parts::{split, PartId, PartSplit};
use crate::config::{PARTS_MANIFEST_FILE_NAME, REASSEMBLED_FILE_NAME, VERIFIED_COPY_FILE_NAME};
use crate::error::Result;
use crate::fs_util::{read_text, write_atomic};
use crate::manifest::{save_split_manifest, SplitManifest};

/// Options for [`split_file`].
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Also write the verified reconstruction next to the parts.
    pub write_verified_copy: bool,
}

/// A part file written by [`split_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPart {
    pub id: PartId,
    pub path: PathBuf,
    pub lines: usize,
}

/// Everything [`split_file`] produced.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub parts: Vec<WrittenPart>,
    pub manifest_path: PathBuf,
    pub verified_copy: Option<PathBuf>,
    pub total_lines: usize,
}

/// How the manifest refers to the source document.
///
/// A bare file name when the source sits next to the manifest, otherwise an
/// absolute path so the reference survives being resolved from `output_dir`.
fn source_reference(input: &Path, output_dir: &Path) -> String {
    let canonical_input = fs::canonicalize(input).unwrap_or_else(|_| input.to_path_buf());
    let canonical_dir = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());

    match (canonical_input.parent(), canonical_input.file_name()) {
        (Some(parent), Some(name)) if parent == canonical_dir => {
            name.to_string_lossy().into_owned()
        }
        _ => canonical_input.to_string_lossy().into_owned(),
    }
}

/// Write every part of `parts` into `output_dir` plus the manifest.
///
/// Parts are written one at a time in manifest order; the manifest is
/// written last.
pub fn write_parts(
    parts: &PartSplit,
    output_dir: &Path,
    source_ref: &str,
) -> Result<(Vec<WrittenPart>, PathBuf)> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(parts.parts.len());
    for part in &parts.parts {
        let path = output_dir.join(part.id.file_name());
        write_atomic(&path, part.content.as_bytes())?;
        tracing::debug!(part = %part.id, path = %path.display(), "Wrote part");
        written.push(WrittenPart {
            id: part.id,
            path,
            lines: part.line_count(),
        });
    }

    let manifest = SplitManifest {
        output: REASSEMBLED_FILE_NAME.to_string(),
        parts: parts.parts.iter().map(|p| p.id.file_name()).collect(),
        baseline_file: source_ref.to_string(),
    };
    let manifest_path = output_dir.join(PARTS_MANIFEST_FILE_NAME);
    save_split_manifest(&manifest, &manifest_path)?;

    Ok((written, manifest_path))
}

/// Split `input` into part files under `output_dir`.
///
/// The round-trip check runs before anything is written; a document that
/// does not reassemble byte-for-byte produces no files at all.
pub fn split_file(input: &Path, output_dir: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let document = read_text("Input file", input)?;
    let parts = split(&document);
    parts.verify_integrity(&document)?;

    fs::create_dir_all(output_dir)?;
    let source_ref = source_reference(input, output_dir);
    let (written, manifest_path) = write_parts(&parts, output_dir, &source_ref)?;

    let verified_copy = if options.write_verified_copy {
        let path = output_dir.join(VERIFIED_COPY_FILE_NAME);
        write_atomic(&path, parts.reassemble().as_bytes())?;
        Some(path)
    } else {
        None
    };

    Ok(SplitReport {
        total_lines: written.iter().map(|p| p.lines).sum(),
        parts: written,
        manifest_path,
        verified_copy,
    })
}
