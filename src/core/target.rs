//! Target definitions - what an install directive can refer to.
//!
//! A Target is a named build artifact declared elsewhere in the build
//! configuration. The install interpreter only needs its name and kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of target being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Executable binary
    #[serde(alias = "bin")]
    Exe,

    /// Static library (.a / .lib)
    #[serde(alias = "lib", alias = "static")]
    StaticLib,

    /// Shared/dynamic library (.so / .dylib / .dll)
    #[serde(alias = "dylib", alias = "dynamic")]
    SharedLib,

    /// Loadable module (plugin), never linked against
    #[serde(alias = "module")]
    ModuleLib,

    /// Header-only library (no compile/link steps, nothing to install)
    #[serde(alias = "header-only", alias = "interface")]
    HeaderOnly,
}

impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::Exe
    }
}

impl TargetKind {
    /// Check if `install(TARGETS ...)` accepts this kind.
    pub fn is_installable(&self) -> bool {
        matches!(
            self,
            TargetKind::Exe | TargetKind::StaticLib | TargetKind::SharedLib | TargetKind::ModuleLib
        )
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TargetKind::Exe => "executable",
            TargetKind::StaticLib => "static library",
            TargetKind::SharedLib => "shared library",
            TargetKind::ModuleLib => "module",
            TargetKind::HeaderOnly => "header-only library",
        }
    }

    /// Manifest spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Exe => "exe",
            TargetKind::StaticLib => "staticlib",
            TargetKind::SharedLib => "sharedlib",
            TargetKind::ModuleLib => "modulelib",
            TargetKind::HeaderOnly => "headeronly",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exe" | "bin" => Ok(TargetKind::Exe),
            "staticlib" | "lib" | "static" => Ok(TargetKind::StaticLib),
            "sharedlib" | "dylib" | "dynamic" => Ok(TargetKind::SharedLib),
            "modulelib" | "module" => Ok(TargetKind::ModuleLib),
            "headeronly" | "header-only" | "interface" => Ok(TargetKind::HeaderOnly),
            _ => Err(format!(
                "unknown target kind `{}` \
                 (expected exe, staticlib, sharedlib, modulelib or headeronly)",
                s
            )),
        }
    }
}

/// A named build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name as written in build scripts
    pub name: String,

    /// What kind of artifact it produces
    #[serde(default)]
    pub kind: TargetKind,
}

impl Target {
    /// Create a new target with the given name and kind.
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Target {
            name: name.into(),
            kind,
        }
    }

    /// Create a new executable target.
    pub fn exe(name: impl Into<String>) -> Self {
        Self::new(name, TargetKind::Exe)
    }

    /// Create a new static library target.
    pub fn staticlib(name: impl Into<String>) -> Self {
        Self::new(name, TargetKind::StaticLib)
    }

    /// Create a new shared library target.
    pub fn sharedlib(name: impl Into<String>) -> Self {
        Self::new(name, TargetKind::SharedLib)
    }

    /// Create a new module library target.
    pub fn modulelib(name: impl Into<String>) -> Self {
        Self::new(name, TargetKind::ModuleLib)
    }

    /// Create a new header-only library target.
    pub fn headeronly(name: impl Into<String>) -> Self {
        Self::new(name, TargetKind::HeaderOnly)
    }
}
