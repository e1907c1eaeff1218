//! Resolution of manifest references and profile names to concrete paths.
//!
//! The transformation core only ever sees resolved paths; the policy of
//! where relative references point lives here.

use std::path::{Component, Path, PathBuf};

/// Base against which relative references are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    pub base_dir: PathBuf,
}

impl ResolveContext {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Context relative to the directory that holds `manifest_path`.
    #[must_use]
    pub fn for_manifest(manifest_path: &Path) -> Self {
        let base_dir = manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { base_dir }
    }

    /// Context for assembling `manifest_path`: the work dir wins when given.
    #[must_use]
    pub fn for_assembly(manifest_path: &Path, work_dir: Option<&Path>) -> Self {
        match work_dir {
            Some(dir) => Self::new(dir),
            None => Self::for_manifest(manifest_path),
        }
    }

    /// Resolve a reference in this context.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> PathBuf {
        resolve(reference, self)
    }
}

/// Resolve `reference` against `context`.
///
/// Absolute references are kept; relative ones are joined onto the base
/// directory. The result is lexically normalized so that equal locations
/// compare equal.
#[must_use]
pub fn resolve(reference: &str, context: &ResolveContext) -> PathBuf {
    let reference = Path::new(reference);
    if reference.is_absolute() {
        normalize_path(reference)
    } else {
        normalize_path(&context.base_dir.join(reference))
    }
}

/// Remove `.` components and fold `..` into the preceding component.
///
/// Purely lexical; symlinks are not followed and the path need not exist.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Locate an assembly profile.
///
/// An existing path is used as given. Otherwise the name is looked up in
/// `profiles_dir`, adding `.yaml` unless it already has a YAML extension.
#[must_use]
pub fn resolve_profile(profile: &str, profiles_dir: &Path) -> PathBuf {
    let direct = Path::new(profile);
    if direct.is_file() {
        return direct.to_path_buf();
    }

    let has_yaml_ext = direct
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if has_yaml_ext {
        profiles_dir.join(profile)
    } else {
        profiles_dir.join(format!("{profile}.yaml"))
    }
}
