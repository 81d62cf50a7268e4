//! Core data structures for the install interpreter.
//!
//! - Targets and their kinds
//! - The target registry the interpreter looks names up in
//! - Platform family detection

pub mod platform;
pub mod registry;
pub mod target;

pub use platform::{PlatformFamily, TargetTriple};
pub use registry::{TargetRegistry, TargetSet};
pub use target::{Target, TargetKind};
