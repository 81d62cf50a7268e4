//! Everything a directive needs from the enclosing build configuration.

use std::path::{Path, PathBuf};

use crate::core::{PlatformFamily, TargetRegistry};
use crate::install::rule::InstallRule;
use crate::util::fs::PathPredicates;

/// Receives the rules of a successfully interpreted directive.
///
/// Rules are appended in order and never removed.
pub trait RuleSink {
    fn register(&mut self, rule: InstallRule);
}

impl RuleSink for Vec<InstallRule> {
    fn register(&mut self, rule: InstallRule) {
        self.push(rule);
    }
}

/// Collaborators for one `install()` directive.
pub struct InstallContext<'a> {
    /// Targets declared in the current directory
    pub registry: &'a dyn TargetRegistry,
    /// Filesystem predicates
    pub fs: &'a dyn PathPredicates,
    /// Directory of the build script declaring the directive
    pub current_dir: PathBuf,
    /// Decides how shared libraries are split into artifacts
    pub platform: PlatformFamily,
    /// Warn about TARGETS destinations no listed target uses
    pub warn_unused_destinations: bool,
}

impl<'a> InstallContext<'a> {
    /// Create a context for the host platform.
    pub fn new(
        registry: &'a dyn TargetRegistry,
        fs: &'a dyn PathPredicates,
        current_dir: impl Into<PathBuf>,
    ) -> Self {
        InstallContext {
            registry,
            fs,
            current_dir: current_dir.into(),
            platform: PlatformFamily::host(),
            warn_unused_destinations: true,
        }
    }

    /// Plan for a specific platform family.
    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    /// Enable or disable unused-destination warnings.
    pub fn with_unused_destination_warnings(mut self, warn: bool) -> Self {
        self.warn_unused_destinations = warn;
        self
    }

    /// Turn a script or file argument into a full path.
    pub fn full_path(&self, token: &str) -> PathBuf {
        if self.fs.is_absolute(Path::new(token)) {
            PathBuf::from(token)
        } else {
            self.current_dir.join(token)
        }
    }
}
