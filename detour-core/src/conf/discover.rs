use crate::conf::error::ConfigError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Discovers regular files matching a glob pattern under `root`.
///
/// Directories matching the pattern are ignored. Entries the glob walker
/// cannot read are logged at debug level and skipped.
///
/// # Arguments
///
/// * `root` - Directory the pattern is resolved against
/// * `pattern` - A glob pattern string (e.g., `"public/**/_redirects"`)
///
/// # Returns
///
/// A sorted `Vec<PathBuf>` of matching files. Empty when nothing matches.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let resolved = resolve_glob(root, pattern);
    let entries = glob::glob(&resolved).map_err(|source| ConfigError::Glob {
        pattern: resolved.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::debug!(path = %e.path().display(), "skipping unreadable entry"),
        }
    }

    files.sort();
    Ok(files)
}

/// Expands several patterns in order.
///
/// Each pattern's matches are sorted as in [`discover`]. A file matched by
/// more than one pattern is listed once, at its first match.
///
/// # Arguments
///
/// * `root` - Directory every pattern is resolved against
/// * `patterns` - Glob patterns, in priority order
///
/// # Errors
///
/// Returns `ConfigError::Glob` for the first malformed pattern.
pub fn discover_all(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        for path in discover(root, pattern)? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Joins `pattern` onto `root`.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
