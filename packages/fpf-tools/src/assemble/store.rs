//! Source of part contents for the assembler.

use std::path::Path;

use crate::error::Result;
use crate::fs_util::read_text;

/// Reads whole text files by resolved path.
///
/// The assembler only talks to this trait, so it can be driven from memory
/// in tests. A missing entry must be reported as `FpfError::NotFound`.
pub trait PartStore {
    fn read(&self, what: &'static str, path: &Path) -> Result<String>;
}

/// [`PartStore`] backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPartStore;

impl PartStore for FsPartStore {
    fn read(&self, what: &'static str, path: &Path) -> Result<String> {
        read_text(what, path)
    }
}

impl<T: PartStore + ?Sized> PartStore for &T {
    fn read(&self, what: &'static str, path: &Path) -> Result<String> {
        (**self).read(what, path)
    }
}
