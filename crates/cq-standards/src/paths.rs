//! Standards file path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the standards tables.
pub const STANDARDS_ENV_VAR: &str = "CQ_STANDARDS_FILE";

/// Resolve the standards override file.
///
/// Resolution order:
/// 1. An explicit path (e.g. a `--standards` flag)
/// 2. `CQ_STANDARDS_FILE` environment variable
///
/// Returns `None` when the embedded tables should be used.
pub fn resolve_standards_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::var_os(STANDARDS_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
