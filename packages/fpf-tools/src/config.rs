//! Configuration constants and patterns for the FPF tools.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Canonical location of the FPF specification.
pub const DEFAULT_SPEC_URL: &str =
    "https://raw.githubusercontent.com/ailev/FPF/refs/heads/main/FPF-Spec.md";

/// Environment variable overriding [`DEFAULT_SPEC_URL`].
pub const SPEC_URL_ENV: &str = "FPF_SPEC_URL";

/// Environment variable overriding [`DEFAULT_PROFILES_DIR`].
pub const PROFILES_DIR_ENV: &str = "FPF_PROFILES_DIR";

/// HTTP timeout in seconds for the spec download.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Directory holding the downloaded spec and generated outputs.
pub const DEFAULT_FPF_DIR: &str = "FPF";

/// File name of the full specification.
pub const SPEC_FILE_NAME: &str = "FPF-Spec.md";

/// File name of the lite (lenient) stripped output.
pub const LITE_FILE_NAME: &str = "FPF-Spec-Lite.md";

/// File name of the aggressive stripped output.
pub const AGGRESSIVE_FILE_NAME: &str = "FPF-Spec-Aggressive.md";

/// File name of the manifest written by `split`.
pub const PARTS_MANIFEST_FILE_NAME: &str = "FPF-Parts-Manifest.yaml";

/// Default assembly target recorded in the split manifest.
pub const REASSEMBLED_FILE_NAME: &str = "FPF-Spec-Reassembled.md";

/// File name of the optional verified copy written by `split --verify-copy`.
pub const VERIFIED_COPY_FILE_NAME: &str = "FPF-Spec-Verified-Copy.md";

/// Prefix of every part file name (`FPF-Part-A.md`).
pub const PART_FILE_PREFIX: &str = "FPF-Part-";

/// Directory searched for assembly profiles.
pub const DEFAULT_PROFILES_DIR: &str = "profiles";

/// Section keywords removed in lite mode.
pub const LENIENT_KEYWORDS: &[&str] = &[
    "SoTA-Echoing",
    "SOTA-Echoing",
    "SoTA Echoing",
    "SOTA Echoing",
    "State-of-the-Art alignment",
];

/// Keywords appended to [`LENIENT_KEYWORDS`] in aggressive mode.
///
/// Order matters: "Problem frame" must be credited before "Problem".
pub const AGGRESSIVE_EXTRA_KEYWORDS: &[&str] = &[
    "Problem frame",
    "Problem",
    "Forces",
    "Rationale",
    "Anti-patterns",
];

/// Markdown header: captures the `#` run and the remainder.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)").expect("valid regex"));

/// First content header after the preface/TOC ("Part A" or "A.0").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static START_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Part A|A\.0)").expect("valid regex"));

/// "Part X" title, applied to a normalized header title.
///
/// Only the first letter counts: "Part Alpha" belongs to part A.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static PART_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Part\s+([A-Z])").expect("valid regex"));

/// Default path of the downloaded spec (`FPF/FPF-Spec.md`).
pub fn default_spec_path() -> PathBuf {
    PathBuf::from(DEFAULT_FPF_DIR).join(SPEC_FILE_NAME)
}

/// Default directory for stripped outputs.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FPF_DIR)
}

/// Default lite output path (`FPF/FPF-Spec-Lite.md`).
pub fn default_lite_path() -> PathBuf {
    default_output_dir().join(LITE_FILE_NAME)
}

/// Default aggressive output path (`FPF/FPF-Spec-Aggressive.md`).
pub fn default_aggressive_path() -> PathBuf {
    default_output_dir().join(AGGRESSIVE_FILE_NAME)
}

/// Spec URL, honouring `FPF_SPEC_URL`.
pub fn spec_url() -> String {
    std::env::var(SPEC_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SPEC_URL.to_string())
}

/// Profiles directory, honouring `FPF_PROFILES_DIR`.
pub fn profiles_dir() -> PathBuf {
    std::env::var(PROFILES_DIR_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_DIR))
}
