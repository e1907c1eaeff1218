//! Removal keyword sets.

use crate::config::{AGGRESSIVE_EXTRA_KEYWORDS, LENIENT_KEYWORDS};

/// Stripping severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Only SoTA-echoing and alignment sections.
    Lite,
    /// Lite plus problem/forces/rationale/anti-pattern sections.
    Aggressive,
}

impl StripMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StripMode::Lite => "lite",
            StripMode::Aggressive => "aggressive",
        }
    }
}

/// Ordered list of keywords matched against normalized header titles.
///
/// Matching is a case-insensitive substring test; the first keyword in list
/// order that matches is the one credited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Build a set from keywords in priority order.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        let lowered = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { keywords, lowered }
    }

    /// The lite keyword set.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(LENIENT_KEYWORDS.iter().copied())
    }

    /// The lite set extended with the aggressive keywords.
    #[must_use]
    pub fn aggressive() -> Self {
        Self::new(
            LENIENT_KEYWORDS
                .iter()
                .chain(AGGRESSIVE_EXTRA_KEYWORDS)
                .copied(),
        )
    }

    #[must_use]
    pub fn for_mode(mode: StripMode) -> Self {
        match mode {
            StripMode::Lite => Self::lenient(),
            StripMode::Aggressive => Self::aggressive(),
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Index of the first keyword contained in `title` (already normalized).
    #[must_use]
    pub fn find_match(&self, title: &str) -> Option<usize> {
        let title = title.to_lowercase();
        self.lowered.iter().position(|k| title.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_is_prefix_of_aggressive() {
        let lenient = KeywordSet::lenient();
        let aggressive = KeywordSet::aggressive();
        assert_eq!(lenient.len(), 5);
        assert_eq!(aggressive.len(), 10);
        assert_eq!(&aggressive.keywords()[..5], lenient.keywords());
    }

    #[test]
    fn test_find_match_case_insensitive() {
        let set = KeywordSet::lenient();
        assert_eq!(set.find_match("A.1:14 sota-echoing notes"), Some(0));
        assert_eq!(set.find_match("State-of-the-Art Alignment"), Some(4));
        assert_eq!(set.find_match("Solution"), None);
    }

    #[test]
    fn test_find_match_first_keyword_wins() {
        let set = KeywordSet::aggressive();
        let frame = set.keywords().iter().position(|k| k == "Problem frame");
        assert_eq!(set.find_match("Problem frame"), frame);

        let problem = set.keywords().iter().position(|k| k == "Problem");
        assert_eq!(set.find_match("Anti-patterns, Problem"), problem);
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(KeywordSet::for_mode(StripMode::Lite), KeywordSet::lenient());
        assert_eq!(
            KeywordSet::for_mode(StripMode::Aggressive),
            KeywordSet::aggressive()
        );
    }
}
