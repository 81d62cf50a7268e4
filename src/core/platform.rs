//! Platform identity for install decisions.
//!
//! Shared libraries install differently depending on whether the platform
//! keeps a separate link-time import library next to the loadable image.
//! That choice is a runtime value so both behaviors can be exercised from
//! one binary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target triple components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTriple {
    /// CPU architecture (x86_64, aarch64, etc.)
    pub arch: String,
    /// Vendor (unknown, apple, pc, etc.)
    pub vendor: String,
    /// Operating system (linux, darwin, windows, cygwin, etc.)
    pub os: String,
    /// Environment/ABI (gnu, musl, msvc, etc.)
    pub env: Option<String>,
}

impl TargetTriple {
    /// Create a new target triple.
    pub fn new(arch: &str, vendor: &str, os: &str, env: Option<&str>) -> Self {
        TargetTriple {
            arch: arch.to_string(),
            vendor: vendor.to_string(),
            os: os.to_string(),
            env: env.map(|s| s.to_string()),
        }
    }

    /// Detect the host target triple.
    pub fn host() -> Self {
        let arch = std::env::consts::ARCH;
        let os = std::env::consts::OS;

        let (vendor, env) = match os {
            "linux" => ("unknown", Some("gnu")),
            "macos" => ("apple", None),
            "windows" => ("pc", Some("msvc")),
            _ => ("unknown", None),
        };

        TargetTriple::new(arch, vendor, os, env)
    }

    /// Parse a target triple string.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() < 3 || parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        Some(TargetTriple {
            arch: parts[0].to_string(),
            vendor: parts[1].to_string(),
            os: parts[2].to_string(),
            env: parts.get(3).map(|s| s.to_string()),
        })
    }
}

impl fmt::Display for TargetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.env {
            Some(env) => write!(f, "{}-{}-{}-{}", self.arch, self.vendor, self.os, env),
            None => write!(f, "{}-{}-{}", self.arch, self.vendor, self.os),
        }
    }
}

/// How a platform packages shared libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// Windows and Cygwin: a `.dll` plus a separate import library
    #[serde(alias = "windows")]
    Dll,

    /// Everything else: the shared object is both linked and loaded
    #[serde(alias = "posix")]
    Unix,
}

impl PlatformFamily {
    /// Classify a target triple.
    pub fn from_triple(triple: &TargetTriple) -> Self {
        let dll_os = matches!(triple.os.as_str(), "windows" | "cygwin");
        let cygnus = triple.env.as_deref() == Some("cygnus");
        if dll_os || cygnus {
            PlatformFamily::Dll
        } else {
            PlatformFamily::Unix
        }
    }

    /// The family of the machine we are running on.
    pub fn host() -> Self {
        Self::from_triple(&TargetTriple::host())
    }

    /// Whether shared libraries have a distinct import library.
    pub fn is_dll(&self) -> bool {
        matches!(self, PlatformFamily::Dll)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Dll => "dll",
            PlatformFamily::Unix => "unix",
        }
    }
}

impl Default for PlatformFamily {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dll" | "windows" => Ok(PlatformFamily::Dll),
            "unix" | "posix" => Ok(PlatformFamily::Unix),
            other => TargetTriple::parse(other)
                .map(|t| PlatformFamily::from_triple(&t))
                .ok_or_else(|| {
                    format!(
                        "unknown platform `{}` (expected dll, unix or a target triple)",
                        s
                    )
                }),
        }
    }
}
