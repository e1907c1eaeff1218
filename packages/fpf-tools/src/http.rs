//! HTTP client wrapper for fetching the spec.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{FpfError, Result};

/// User agent string identifying these tools.
const USER_AGENT: &str = concat!("fpf-tools/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the fixed timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch `url` with a single GET.
///
/// There are no retries: a transport failure is reported as
/// [`FpfError::Download`], a non-success status as [`FpfError::HttpStatus`].
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().map_err(|source| FpfError::Download {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = %status, url, "Download rejected");
        return Err(FpfError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(|source| FpfError::Download {
        url: url.to_string(),
        source,
    })?;
    Ok(bytes.to_vec())
}
