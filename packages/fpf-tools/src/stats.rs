//! Before/after statistics for stripping and assembly.
//!
//! Statistics are derived values. They are reported, never persisted, and
//! never feed back into the transformation.

use std::fmt;
use std::path::Path;

/// Original vs. new line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStats {
    pub original_lines: usize,
    pub new_lines: usize,
}

impl LineStats {
    #[must_use]
    pub fn new(original_lines: usize, new_lines: usize) -> Self {
        Self {
            original_lines,
            new_lines,
        }
    }

    /// Reduction in percent, rounded to one decimal. Zero for an empty original.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        if self.original_lines == 0 {
            return 0.0;
        }
        let ratio = self.new_lines as f64 / self.original_lines as f64;
        ((1.0 - ratio) * 1000.0).round() / 10.0
    }
}

impl fmt::Display for LineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {} -> {} (Reduction: {:.1}%)",
            self.original_lines,
            self.new_lines,
            self.reduction_percent()
        )
    }
}

/// Sections removed for one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub sections: usize,
}

/// Result of stripping one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionStats {
    /// One entry per keyword, in keyword list order, zero counts included.
    pub removed_counts: Vec<KeywordCount>,
    pub lines: LineStats,
}

impl CompressionStats {
    /// Sections removed for `keyword`, zero when unknown.
    #[must_use]
    pub fn removed(&self, keyword: &str) -> usize {
        self.removed_counts
            .iter()
            .find(|c| c.keyword == keyword)
            .map_or(0, |c| c.sections)
    }

    /// Total number of removed sections.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.removed_counts.iter().map(|c| c.sections).sum()
    }

    /// Human-readable report for `output`.
    #[must_use]
    pub fn report(&self, output: &Path) -> String {
        let entries = self
            .removed_counts
            .iter()
            .filter(|c| c.sections > 0)
            .map(|c| format!("{}: {} sections", c.keyword, c.sections));
        render_report(output, entries, &self.lines)
    }
}

/// A baseline part left out of an assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmittedPart {
    pub reference: String,
    pub lines: usize,
}

/// Result of assembling against a baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyStats {
    pub lines: LineStats,
    /// Baseline-manifest parts not requested; empty for document baselines.
    pub omitted_parts: Vec<OmittedPart>,
}

impl AssemblyStats {
    /// Human-readable report for `output`.
    #[must_use]
    pub fn report(&self, output: &Path) -> String {
        let entries = self
            .omitted_parts
            .iter()
            .map(|p| format!("{}: {} lines", p.reference, p.lines));
        render_report(output, entries, &self.lines)
    }
}

fn render_report(
    output: &Path,
    entries: impl Iterator<Item = String>,
    lines: &LineStats,
) -> String {
    let mut report = format!("Stats for {}:\nRemoval statistics:\n", output.display());
    for entry in entries {
        report.push_str("  - ");
        report.push_str(&entry);
        report.push('\n');
    }
    report.push_str(&lines.to_string());
    report
}
