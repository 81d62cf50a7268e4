//! Test fixtures for common test scenarios.

use crate::core::{PlatformFamily, Target, TargetSet};
use crate::install::InstallContext;

use super::MockFileSystem;

/// Declaring directory used by every fixture context.
pub const PROJECT_DIR: &str = "/project/src";

/// One target of every kind.
///
/// - `app`: executable
/// - `core`: shared library
/// - `archive`: static library
/// - `plugin`: module
/// - `headers`: header-only (not installable)
pub fn sample_targets() -> TargetSet {
    TargetSet::new()
        .with(Target::exe("app"))
        .with(Target::sharedlib("core"))
        .with(Target::staticlib("archive"))
        .with(Target::modulelib("plugin"))
        .with(Target::headeronly("headers"))
}

/// Context rooted at [`PROJECT_DIR`] on a non-DLL platform.
pub fn unix_context<'a>(registry: &'a TargetSet, fs: &'a MockFileSystem) -> InstallContext<'a> {
    InstallContext::new(registry, fs, PROJECT_DIR).with_platform(PlatformFamily::Unix)
}

/// Context rooted at [`PROJECT_DIR`] on a DLL platform.
pub fn dll_context<'a>(registry: &'a TargetSet, fs: &'a MockFileSystem) -> InstallContext<'a> {
    InstallContext::new(registry, fs, PROJECT_DIR).with_platform(PlatformFamily::Dll)
}
