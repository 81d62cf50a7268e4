//! Harbour install - the `install()` directive interpreter
//!
//! This crate turns the flat token list of an `install()` directive into
//! installation rules: scripts to run, build targets to copy, and plain
//! files or programs with their permissions and destinations.

pub mod core;
pub mod install;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use core::{PlatformFamily, Target, TargetKind, TargetRegistry, TargetSet};
pub use install::{execute, plan, InstallContext, InstallError, InstallRule, Mode, RuleSink};
pub use util::fs::{HostFs, PathPredicates};
