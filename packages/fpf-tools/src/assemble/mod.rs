//! Manifest assembly: concatenate selected parts into one document.

mod assembler;
mod store;

pub use assembler::{assemble_manifest, Assembler, Assembly};
pub use store::{FsPartStore, PartStore};
