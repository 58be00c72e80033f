//! Configuration tables for the CQ accountability report.
//!
//! Manors, duty roles, rank abbreviations, late time codes, signature
//! requirements, and the bay → MTL assignment map. The defaults are
//! embedded; a TOML file with the same layout can replace them.

#![deny(unsafe_code)]

pub mod document;
pub mod embedded;
pub mod error;
pub mod paths;
pub mod registry;

pub use crate::document::{RankEntry, StandardsDocument};
pub use crate::error::{Result, StandardsError};
pub use crate::paths::{STANDARDS_ENV_VAR, resolve_standards_path};
pub use crate::registry::{SCHEMA, SCHEMA_VERSION, Standards};
