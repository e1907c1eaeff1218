//! File helpers: whole-file text reads and atomic writes.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FpfError, Result};

/// Read a UTF-8 text file, mapping a missing file to [`FpfError::NotFound`].
pub fn read_text(what: &'static str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FpfError::from_io(what, path, e))
}

/// Write `content` to `path` atomically.
///
/// Writes to a hidden temp file next to the target, syncs it to disk, then
/// renames it over the target. A failed write never leaves a truncated target.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = parent.join(format!(".{file_name}.tmp"));

    let written = (|| -> Result<()> {
        let mut file = File::create(&temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
        Ok(())
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_file);
        return Err(e);
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
