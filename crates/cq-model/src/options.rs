//! Extraction behavior switches.

use serde::{Deserialize, Serialize};

/// How extraction treats problems in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// Collect every problem and fail once at the end. Used before the
    /// final email is generated.
    #[default]
    Strict,
    /// Never fail; substitute empty or best-effort values. Used for live
    /// preview.
    Lenient,
}

impl ExtractionMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, ExtractionMode::Strict)
    }
}
