//! Command implementations

pub mod completions;
pub mod permissions;
pub mod plan;
