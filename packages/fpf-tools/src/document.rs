//! Line and header classification shared by the stripper and the splitter.
//!
//! A document is treated as a flat sequence of lines. The only structure
//! recognised is the markdown header line (`#`, `##`, ...) and its level.

use crate::config::{HEADER_PATTERN, PART_TITLE_PATTERN, START_MARKER_PATTERN};

/// Iterate over the lines of `text`, each including its terminator.
///
/// `\n` and `\r\n` endings are kept verbatim; a final line without a
/// terminator is yielded as-is. Concatenating the items gives back `text`.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Number of lines in `text`, counted the same way as [`lines`].
pub fn line_count(text: &str) -> usize {
    lines(text).count()
}

/// Replace dash and space variants common in the FPF source with ASCII.
///
/// Used for matching only; output lines are never rewritten.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2011}' | '\u{2013}' | '\u{2014}' => '-',
            '\u{00A0}' => ' ',
            other => other,
        })
        .collect()
}

/// A header line: its `#` depth and trimmed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub level: usize,
    pub title: &'a str,
}

impl<'a> Header<'a> {
    /// Classify a line, terminator included; returns `None` for non-header lines.
    ///
    /// The terminator counts as the whitespace after the hashes, so a bare
    /// `#\n` is a level-1 header with an empty title. A `\r` left in the
    /// capture is trimmed off the title.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = HEADER_PATTERN.captures(line)?;
        let hashes = caps.get(1)?;
        let title = caps.get(2)?;
        Some(Self {
            level: hashes.as_str().len(),
            title: title.as_str().trim(),
        })
    }

    /// Title with dash/space variants replaced by ASCII.
    pub fn normalized_title(&self) -> String {
        normalize_text(self.title)
    }

    /// True for the header that starts the payload ("Part A" or "A.0").
    pub fn is_start_marker(&self) -> bool {
        START_MARKER_PATTERN.is_match(self.title)
    }

    /// Upper-case letter of a "Part X" header, if this is one.
    pub fn part_letter(&self) -> Option<char> {
        let title = self.normalized_title();
        let caps = PART_TITLE_PATTERN.captures(&title)?;
        caps.get(1)?
            .as_str()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }
}
