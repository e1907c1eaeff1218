//! Section removal by header keyword.

use std::path::Path;

use super::keywords::KeywordSet;
use crate::document::{lines, Header};
use crate::error::Result;
use crate::fs_util::{read_text, write_atomic};
use crate::stats::{CompressionStats, KeywordCount, LineStats};

/// Position of the stripper in the line stream.
///
/// Threaded explicitly through the fold in [`strip`], so every call starts
/// from [`StripState::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripState {
    /// The start marker has been seen.
    pub started: bool,
    /// Level of the section being removed, if any.
    pub skip_level: Option<usize>,
}

/// What happens to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Copy the line to the output.
    Emit,
    /// Line precedes the start marker.
    Preface,
    /// Header opens a removed section, credited to keyword `n`.
    Removed(usize),
    /// Line lies inside a removed section.
    Skipped,
}

/// Advance the state machine by one line.
#[must_use]
pub fn step(state: StripState, line: &str, keywords: &KeywordSet) -> (StripState, Verdict) {
    let header = Header::parse(line);

    if !state.started {
        return match header {
            Some(h) if h.is_start_marker() => (
                StripState {
                    started: true,
                    skip_level: None,
                },
                Verdict::Emit,
            ),
            _ => (state, Verdict::Preface),
        };
    }

    let Some(header) = header else {
        let verdict = if state.skip_level.is_some() {
            Verdict::Skipped
        } else {
            Verdict::Emit
        };
        return (state, verdict);
    };

    // Still nested inside the removed section.
    if state.skip_level.is_some_and(|level| header.level > level) {
        return (state, Verdict::Skipped);
    }

    // Not skipping any more: this header is a fresh candidate.
    match keywords.find_match(&header.normalized_title()) {
        Some(index) => (
            StripState {
                started: true,
                skip_level: Some(header.level),
            },
            Verdict::Removed(index),
        ),
        None => (
            StripState {
                started: true,
                skip_level: None,
            },
            Verdict::Emit,
        ),
    }
}

/// Stripped document plus statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub output: String,
    pub stats: CompressionStats,
    /// False when no start marker was found (output is then empty).
    pub content_started: bool,
}

struct Accumulator {
    state: StripState,
    output: String,
    counts: Vec<usize>,
    original_lines: usize,
    new_lines: usize,
}

/// Drop the preface and every section whose title matches `keywords`.
#[must_use]
pub fn strip(document: &str, keywords: &KeywordSet) -> StripOutcome {
    let initial = Accumulator {
        state: StripState::default(),
        output: String::with_capacity(document.len()),
        counts: vec![0; keywords.len()],
        original_lines: 0,
        new_lines: 0,
    };

    let acc = lines(document).fold(initial, |mut acc, line| {
        acc.original_lines += 1;
        let (state, verdict) = step(acc.state, line, keywords);
        match verdict {
            Verdict::Emit => {
                acc.output.push_str(line);
                acc.new_lines += 1;
            }
            Verdict::Removed(index) => {
                acc.counts[index] += 1;
                tracing::debug!(
                    keyword = %keywords.keywords()[index],
                    title = line.trim_end(),
                    "Removing section"
                );
            }
            Verdict::Preface | Verdict::Skipped => {}
        }
        acc.state = state;
        acc
    });

    let removed_counts = keywords
        .keywords()
        .iter()
        .zip(acc.counts)
        .map(|(keyword, sections)| KeywordCount {
            keyword: keyword.clone(),
            sections,
        })
        .collect();

    StripOutcome {
        output: acc.output,
        stats: CompressionStats {
            removed_counts,
            lines: LineStats::new(acc.original_lines, acc.new_lines),
        },
        content_started: acc.state.started,
    }
}

/// Strip `input` into `output`.
///
/// The input is read completely before anything is written, so a missing
/// input leaves no output file behind.
pub fn strip_file(input: &Path, output: &Path, keywords: &KeywordSet) -> Result<StripOutcome> {
    let document = read_text("Input file", input)?;
    let outcome = strip(&document, keywords);

    if !outcome.content_started {
        tracing::warn!(
            input = %input.display(),
            "No 'Part A' or 'A.0' header found; stripped output is empty"
        );
    }

    write_atomic(output, outcome.output.as_bytes())?;
    Ok(outcome)
}
