//! Part splitting: cut the document at "Part X" headers.
//!
//! Parts concatenated in manifest order reproduce the source byte-for-byte.

mod parts;
mod writer;

pub use parts::{split, Part, PartId, PartSplit};
pub use writer::{split_file, write_parts, SplitOptions, SplitReport, WrittenPart};
