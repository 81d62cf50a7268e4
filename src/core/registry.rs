//! Target registry - name lookup for install directives.
//!
//! The TargetRegistry trait is the only view the install interpreter has
//! of the targets declared in the current directory.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::target::{Target, TargetKind};

/// A source of declared targets.
pub trait TargetRegistry {
    /// Look up a target by the name it was declared with.
    fn find_target(&self, name: &str) -> Option<&Target>;
}

/// An in-memory, insertion-ordered set of targets.
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    targets: Vec<Target>,
}

/// On-disk target manifest.
///
/// ```toml
/// [targets]
/// mylib = "sharedlib"
/// tool = "exe"
/// ```
#[derive(Debug, Deserialize)]
struct TargetManifest {
    #[serde(default)]
    targets: toml::Table,
}

impl TargetSet {
    /// Create a new empty target set.
    pub fn new() -> Self {
        TargetSet {
            targets: Vec::new(),
        }
    }

    /// Add a target, replacing any earlier target with the same name.
    pub fn add(&mut self, target: Target) {
        match self.targets.iter_mut().find(|t| t.name == target.name) {
            Some(existing) => *existing = target,
            None => self.targets.push(target),
        }
    }

    /// Builder-style variant of [`TargetSet::add`].
    pub fn with(mut self, target: Target) -> Self {
        self.add(target);
        self
    }

    /// Parse a `NAME=KIND` pair, as accepted on the command line.
    pub fn add_spec(&mut self, spec: &str) -> Result<()> {
        let Some((name, kind)) = spec.split_once('=') else {
            bail!("invalid target `{}`\nhint: use NAME=KIND, e.g. mylib=sharedlib", spec);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("invalid target `{}`: name is empty", spec);
        }
        let kind: TargetKind = kind.trim().parse().map_err(|e: String| anyhow::anyhow!(e))?;
        self.add(Target::new(name, kind));
        Ok(())
    }

    /// Load targets from a TOML manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read target manifest: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("failed to parse target manifest: {}", path.display()))
    }

    /// Parse targets from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let manifest: TargetManifest = toml::from_str(contents)?;
        let mut set = TargetSet::new();
        for (name, value) in manifest.targets {
            let kind: TargetKind = value
                .try_into()
                .with_context(|| format!("invalid kind for target `{}`", name))?;
            set.add(Target::new(name, kind));
        }
        Ok(set)
    }

    /// Number of targets in the set.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over targets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}

impl TargetRegistry for TargetSet {
    fn find_target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}
