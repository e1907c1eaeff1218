//! Concatenation of manifest-listed parts, with optional baseline statistics.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::store::{FsPartStore, PartStore};
use crate::document::line_count;
use crate::error::{FpfError, Result};
use crate::fs_util::write_atomic;
use crate::manifest::{load_manifest, parse_part_list, AssemblyManifest, BaselineRef};
use crate::resolve::ResolveContext;
use crate::stats::{AssemblyStats, LineStats, OmittedPart};

/// Result of assembling one manifest.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub output_path: PathBuf,
    pub content: String,
    /// Lines in `content`.
    pub lines: usize,
    /// `None` when no baseline was referenced or it could not be loaded.
    pub stats: Option<AssemblyStats>,
    /// Non-fatal problems, e.g. an unreadable baseline.
    pub warnings: Vec<String>,
}

/// A baseline manifest part, as written and as resolved.
#[derive(Debug, Clone)]
struct BaselinePart {
    reference: String,
    path: PathBuf,
}

#[derive(Debug, Clone)]
enum LoadedBaseline {
    Document { lines: usize },
    Manifest { path: PathBuf, parts: Vec<BaselinePart> },
}

/// Builds assemblies from manifests, reading parts through a [`PartStore`].
pub struct Assembler<S: PartStore> {
    store: S,
}

impl<S: PartStore> Assembler<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Assemble `manifest` in memory.
    ///
    /// Fails before producing anything when a part is missing or, with a
    /// baseline manifest, when a part is not listed in the baseline. A
    /// baseline that cannot be loaded only adds a warning.
    pub fn build(&self, manifest: &AssemblyManifest, ctx: &ResolveContext) -> Result<Assembly> {
        let output_path = ctx.resolve(&manifest.output);

        let mut contents = Vec::with_capacity(manifest.parts.len());
        for reference in &manifest.parts {
            let path = ctx.resolve(reference);
            let text = self.store.read("Part file", &path)?;
            tracing::debug!(part = %reference, lines = line_count(&text), "Loaded part");
            contents.push((path, text));
        }

        let mut warnings = Vec::new();
        let baseline = match &manifest.baseline {
            Some(reference) => self.load_baseline(reference, ctx, &mut warnings),
            None => None,
        };

        if let Some(LoadedBaseline::Manifest { path, parts }) = &baseline {
            let allowed: HashSet<&Path> = parts.iter().map(|p| p.path.as_path()).collect();
            for (reference, (part_path, _)) in manifest.parts.iter().zip(&contents) {
                if !allowed.contains(part_path.as_path()) {
                    return Err(FpfError::IntegrityViolation(format!(
                        "part '{reference}' is not listed in baseline manifest {}",
                        path.display()
                    )));
                }
            }
        }

        let content: String = contents.iter().map(|(_, text)| text.as_str()).collect();
        let lines = line_count(&content);

        let stats = baseline.and_then(|baseline| {
            let requested: HashSet<&Path> = contents.iter().map(|(p, _)| p.as_path()).collect();
            self.baseline_stats(baseline, &requested, lines, &mut warnings)
        });

        Ok(Assembly {
            output_path,
            content,
            lines,
            stats,
            warnings,
        })
    }

    /// Load a baseline; failures become warnings.
    fn load_baseline(
        &self,
        reference: &BaselineRef,
        ctx: &ResolveContext,
        warnings: &mut Vec<String>,
    ) -> Option<LoadedBaseline> {
        let path = ctx.resolve(reference.reference());
        let loaded = match reference {
            BaselineRef::Document(_) => self
                .store
                .read("Baseline file", &path)
                .map(|text| LoadedBaseline::Document {
                    lines: line_count(&text),
                }),
            BaselineRef::Manifest(_) => self
                .store
                .read("Baseline manifest", &path)
                .and_then(|text| parse_part_list(&text, &path))
                .map(|references| {
                    let baseline_ctx = ResolveContext::for_manifest(&path);
                    let parts = references
                        .into_iter()
                        .map(|reference| BaselinePart {
                            path: baseline_ctx.resolve(&reference),
                            reference,
                        })
                        .collect();
                    LoadedBaseline::Manifest {
                        path: path.clone(),
                        parts,
                    }
                }),
        };

        match loaded {
            Ok(baseline) => Some(baseline),
            Err(e) => {
                degrade(warnings, format!("{e}; skipping statistics"));
                None
            }
        }
    }

    fn baseline_stats(
        &self,
        baseline: LoadedBaseline,
        requested: &HashSet<&Path>,
        new_lines: usize,
        warnings: &mut Vec<String>,
    ) -> Option<AssemblyStats> {
        match baseline {
            LoadedBaseline::Document { lines } => Some(AssemblyStats {
                lines: LineStats::new(lines, new_lines),
                omitted_parts: Vec::new(),
            }),
            LoadedBaseline::Manifest { parts, .. } => {
                let mut original = 0;
                let mut omitted = Vec::new();
                for part in parts {
                    let lines = match self.store.read("Baseline part", &part.path) {
                        Ok(text) => line_count(&text),
                        Err(e) => {
                            degrade(warnings, format!("{e}; skipping statistics"));
                            return None;
                        }
                    };
                    original += lines;
                    if !requested.contains(part.path.as_path()) {
                        omitted.push(OmittedPart {
                            reference: part.reference,
                            lines,
                        });
                    }
                }
                Some(AssemblyStats {
                    lines: LineStats::new(original, new_lines),
                    omitted_parts: omitted,
                })
            }
        }
    }
}

fn degrade(warnings: &mut Vec<String>, message: String) {
    tracing::warn!("{message}");
    warnings.push(message);
}

/// Load the manifest at `manifest_path`, assemble it and write the output.
///
/// Relative references resolve against `work_dir` when given, otherwise
/// against the manifest's directory.
pub fn assemble_manifest(manifest_path: &Path, work_dir: Option<&Path>) -> Result<Assembly> {
    let manifest = load_manifest(manifest_path)?;
    let ctx = ResolveContext::for_assembly(manifest_path, work_dir);

    let assembly = Assembler::new(FsPartStore).build(&manifest, &ctx)?;
    write_atomic(&assembly.output_path, assembly.content.as_bytes())?;
    Ok(assembly)
}
