//! Section stripping: drop the preface and keyword-matched sections.
//!
//! A removed section is its header plus everything up to the next header of
//! the same or a shallower level.

mod keywords;
mod stripper;

pub use keywords::{KeywordSet, StripMode};
pub use stripper::{step, strip, strip_file, StripOutcome, StripState, Verdict};
