//! CLI library components for the CQ accountability email.

pub mod input;
pub mod logging;
