//! Standards tables embedded at compile time.
//!
//! The default tables ship inside the binary so the report works without
//! any file on disk. A file override is resolved by [`crate::paths`].

use std::sync::LazyLock;

use crate::Standards;

/// The default standards document.
pub const STANDARDS_TOML: &str = include_str!("../data/standards.toml");

static EMBEDDED: LazyLock<Standards> = LazyLock::new(|| {
    Standards::from_toml_str(STANDARDS_TOML).expect("embedded standards.toml is valid")
});

/// Shared, parsed default tables. Parsed once per process.
pub fn embedded() -> &'static Standards {
    &EMBEDDED
}
