//! Download of the canonical spec document.

use std::path::Path;

use crate::error::Result;
use crate::fs_util::write_atomic;
use crate::http::{create_client, download_bytes};

/// Fetch `url` and store the body at `output`.
///
/// The file is only created once the whole body has arrived, so a failed
/// download leaves nothing behind. Returns the number of bytes written.
pub fn download_spec(url: &str, output: &Path) -> Result<usize> {
    let client = create_client()?;

    tracing::debug!(url, "Downloading spec");
    let body = download_bytes(&client, url)?;

    write_atomic(output, &body)?;
    tracing::debug!(bytes = body.len(), path = %output.display(), "Saved spec");
    Ok(body.len())
}
