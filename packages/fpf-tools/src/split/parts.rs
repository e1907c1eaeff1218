//! Partitioning of a document at "Part X" headers.

use std::fmt;

use crate::config::PART_FILE_PREFIX;
use crate::document::{line_count, lines, Header};
use crate::error::{FpfError, Result};

/// Identifier of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    /// Everything before the first Part header.
    Preface,
    /// `Part <letter>`, letter always upper-case.
    Letter(char),
}

impl PartId {
    /// File name for this part, e.g. `FPF-Part-A.md`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{PART_FILE_PREFIX}{self}.md")
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartId::Preface => f.write_str("Preface"),
            PartId::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// One part and its verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub id: PartId,
    pub content: String,
}

impl Part {
    #[must_use]
    pub fn line_count(&self) -> usize {
        line_count(&self.content)
    }
}

/// Parts in first-seen order. The Preface is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSplit {
    pub parts: Vec<Part>,
}

impl PartSplit {
    /// Part identifiers in manifest order.
    #[must_use]
    pub fn ids(&self) -> Vec<PartId> {
        self.parts.iter().map(|p| p.id).collect()
    }

    #[must_use]
    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Concatenate all parts in order.
    #[must_use]
    pub fn reassemble(&self) -> String {
        self.parts.iter().map(|p| p.content.as_str()).collect()
    }

    /// Check that the parts reproduce `original` byte-for-byte.
    ///
    /// On mismatch the error names the first differing line.
    pub fn verify_integrity(&self, original: &str) -> Result<()> {
        let rebuilt = self.reassemble();
        if rebuilt == original {
            return Ok(());
        }

        let expected = line_count(original);
        let actual = line_count(&rebuilt);
        if expected != actual {
            return Err(FpfError::IntegrityViolation(format!(
                "line count mismatch: original {expected}, reconstructed {actual}"
            )));
        }

        let mismatch = lines(original)
            .zip(lines(&rebuilt))
            .position(|(a, b)| a != b)
            .map_or(expected, |i| i + 1);
        Err(FpfError::IntegrityViolation(format!(
            "reconstructed document differs from original at line {mismatch}"
        )))
    }
}

/// Split `document` at Part headers of any level.
///
/// A Part header starts a new part and is its first line. A letter seen again
/// reopens its existing part: lines are appended there and the part keeps its
/// first-seen position. If the reopening is not contiguous the result no
/// longer round-trips, which [`PartSplit::verify_integrity`] reports.
#[must_use]
pub fn split(document: &str) -> PartSplit {
    let mut parts = vec![Part {
        id: PartId::Preface,
        content: String::new(),
    }];
    let mut current = 0;

    for line in lines(document) {
        if let Some(letter) = Header::parse(line).and_then(|h| h.part_letter()) {
            let id = PartId::Letter(letter);
            current = match parts.iter().position(|p| p.id == id) {
                Some(index) => {
                    tracing::debug!(part = %id, "Reopening part");
                    index
                }
                None => {
                    tracing::debug!(part = %id, "Found start of part");
                    parts.push(Part {
                        id,
                        content: String::new(),
                    });
                    parts.len() - 1
                }
            };
        }
        parts[current].content.push_str(line);
    }

    PartSplit { parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_scenario() {
        let doc = "Pre1\nPre2\n# Part A\nA1\n## Part B\nB1\n";
        let result = split(doc);

        assert_eq!(
            result.ids(),
            vec![PartId::Preface, PartId::Letter('A'), PartId::Letter('B')]
        );
        assert_eq!(result.parts[0].content, "Pre1\nPre2\n");
        assert_eq!(result.parts[1].content, "# Part A\nA1\n");
        assert_eq!(result.parts[2].content, "## Part B\nB1\n");
        assert!(result.verify_integrity(doc).is_ok());
    }

    #[test]
    fn test_split_empty_preface() {
        let doc = "# Part A\nA1\n";
        let result = split(doc);

        assert_eq!(result.parts[0].id, PartId::Preface);
        assert_eq!(result.parts[0].content, "");
        assert_eq!(result.parts[0].line_count(), 0);
        assert_eq!(result.reassemble(), doc);
    }

    #[test]
    fn test_split_empty_document() {
        let result = split("");
        assert_eq!(result.ids(), vec![PartId::Preface]);
        assert!(result.verify_integrity("").is_ok());
    }

    #[test]
    fn test_split_normalizes_dashes_and_case() {
        let doc = "# part c \u{2014} Architheories\nC1\n###\u{00A0}Part D\u{2011}x\nD1\n";
        let result = split(doc);

        assert_eq!(
            result.ids(),
            vec![PartId::Preface, PartId::Letter('C'), PartId::Letter('D')]
        );
        assert!(result.verify_integrity(doc).is_ok());
    }

    #[test]
    fn test_split_buckets_by_first_letter() {
        let doc = "# Part Alpha\nA1\n# Part B2\nB1\n";
        let result = split(doc);

        assert_eq!(
            result.ids(),
            vec![PartId::Preface, PartId::Letter('A'), PartId::Letter('B')]
        );
        assert_eq!(result.reassemble(), doc);
    }

    #[test]
    fn test_split_ignores_non_part_headers() {
        let doc = "# Part A\n## A.1 Part of the whole\n# Partial\nSee Part B\n";
        let result = split(doc);
        assert_eq!(result.ids(), vec![PartId::Preface, PartId::Letter('A')]);
    }

    #[test]
    fn test_split_contiguous_reopen_round_trips() {
        let doc = "# Part A\nA1\n# Part A (continued)\nA2\n# Part B\nB1\n";
        let result = split(doc);

        assert_eq!(result.parts.len(), 3);
        assert_eq!(
            result.get(PartId::Letter('A')).unwrap().content,
            "# Part A\nA1\n# Part A (continued)\nA2\n"
        );
        assert!(result.verify_integrity(doc).is_ok());
    }

    #[test]
    fn test_split_non_contiguous_reopen_keeps_first_position() {
        let doc = "# Part A\nA1\n# Part B\nB1\n# Part A\nA2\n";
        let result = split(doc);

        assert_eq!(
            result.ids(),
            vec![PartId::Preface, PartId::Letter('A'), PartId::Letter('B')]
        );
        assert_eq!(
            result.get(PartId::Letter('A')).unwrap().content,
            "# Part A\nA1\n# Part A\nA2\n"
        );

        let err = result.verify_integrity(doc).unwrap_err();
        assert!(matches!(err, FpfError::IntegrityViolation(_)));
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_split_preserves_crlf_and_missing_final_newline() {
        let doc = "Pre\r\n# Part A\r\nA1";
        let result = split(doc);
        assert_eq!(result.parts[1].content, "# Part A\r\nA1");
        assert!(result.verify_integrity(doc).is_ok());
    }

    #[test]
    fn test_verify_integrity_line_count_mismatch() {
        let result = split("# Part A\nA1\n");
        let err = result.verify_integrity("# Part A\nA1\nextra\n").unwrap_err();
        assert!(err.to_string().contains("line count mismatch"));
    }

    #[test]
    fn test_part_file_names() {
        assert_eq!(PartId::Preface.file_name(), "FPF-Part-Preface.md");
        assert_eq!(PartId::Letter('K').file_name(), "FPF-Part-K.md");
    }
}
