//! Installation rules - what the install step will do.
//!
//! Rules are produced by the directive interpreter and handed to the build
//! configuration, which later generates the install script from them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::Target;
use crate::install::permissions::PermissionSet;

/// Which destination a target artifact was installed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactRole {
    /// Static libraries, modules, import libraries, non-DLL shared libraries
    Library,
    /// Executables and DLLs
    Runtime,
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactRole::Library => write!(f, "library"),
            ArtifactRole::Runtime => write!(f, "runtime"),
        }
    }
}

/// Run a script at install time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRule {
    /// Full path of the script
    pub path: PathBuf,
}

/// Install one artifact of a build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRule {
    pub target: Target,
    pub role: ArtifactRole,
    /// Resolved destination directory
    pub destination: String,
    /// The link-time stub of a DLL rather than the DLL itself
    pub import_library: bool,
}

/// Install a list of files (or programs) into one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesRule {
    /// Full paths, in directive order
    pub files: Vec<PathBuf>,
    /// Resolved destination directory
    pub destination: String,
    /// Installed with execute permission by default (PROGRAMS mode)
    pub program: bool,
    pub permissions: PermissionSet,
    /// Replacement file name; only ever set when `files` has one entry
    pub rename: Option<String>,
}

/// A registered installation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InstallRule {
    Script(ScriptRule),
    Target(TargetRule),
    Files(FilesRule),
}

impl From<ScriptRule> for InstallRule {
    fn from(rule: ScriptRule) -> Self {
        InstallRule::Script(rule)
    }
}

impl From<TargetRule> for InstallRule {
    fn from(rule: TargetRule) -> Self {
        InstallRule::Target(rule)
    }
}

impl From<FilesRule> for InstallRule {
    fn from(rule: FilesRule) -> Self {
        InstallRule::Files(rule)
    }
}

impl fmt::Display for InstallRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallRule::Script(rule) => write!(f, "script {}", rule.path.display()),

            InstallRule::Target(rule) => {
                write!(
                    f,
                    "target {} ({}) {} -> {}",
                    rule.target.name, rule.target.kind, rule.role, rule.destination
                )?;
                if rule.import_library {
                    write!(f, " [import library]")?;
                }
                Ok(())
            }

            InstallRule::Files(rule) => {
                let label = if rule.program { "programs" } else { "files" };
                let files: Vec<String> = rule
                    .files
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                write!(f, "{} {} -> {}", label, files.join(", "), rule.destination)?;
                if !rule.permissions.is_empty() {
                    write!(f, " [permissions: {}]", rule.permissions)?;
                }
                if let Some(rename) = &rule.rename {
                    write!(f, " [rename: {}]", rename)?;
                }
                Ok(())
            }
        }
    }
}
