//! File permissions accepted by `install(FILES|PROGRAMS ... PERMISSIONS ...)`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One permission bit from the fixed install vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    OwnerRead,
    OwnerWrite,
    OwnerExecute,
    GroupRead,
    GroupWrite,
    GroupExecute,
    WorldRead,
    WorldWrite,
    WorldExecute,
    SetUid,
    SetGid,
}

impl Permission {
    /// Every permission, in documentation order.
    pub const ALL: [Permission; 11] = [
        Permission::OwnerRead,
        Permission::OwnerWrite,
        Permission::OwnerExecute,
        Permission::GroupRead,
        Permission::GroupWrite,
        Permission::GroupExecute,
        Permission::WorldRead,
        Permission::WorldWrite,
        Permission::WorldExecute,
        Permission::SetUid,
        Permission::SetGid,
    ];

    /// The keyword as written in build scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::OwnerRead => "OWNER_READ",
            Permission::OwnerWrite => "OWNER_WRITE",
            Permission::OwnerExecute => "OWNER_EXECUTE",
            Permission::GroupRead => "GROUP_READ",
            Permission::GroupWrite => "GROUP_WRITE",
            Permission::GroupExecute => "GROUP_EXECUTE",
            Permission::WorldRead => "WORLD_READ",
            Permission::WorldWrite => "WORLD_WRITE",
            Permission::WorldExecute => "WORLD_EXECUTE",
            Permission::SetUid => "SETUID",
            Permission::SetGid => "SETGID",
        }
    }

    /// POSIX mode bit.
    pub fn mode_bits(&self) -> u32 {
        match self {
            Permission::OwnerRead => 0o400,
            Permission::OwnerWrite => 0o200,
            Permission::OwnerExecute => 0o100,
            Permission::GroupRead => 0o040,
            Permission::GroupWrite => 0o020,
            Permission::GroupExecute => 0o010,
            Permission::WorldRead => 0o004,
            Permission::WorldWrite => 0o002,
            Permission::WorldExecute => 0o001,
            Permission::SetUid => 0o4000,
            Permission::SetGid => 0o2000,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ();

    /// Keywords are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

/// Accumulated permissions for one files rule.
///
/// Stored as the literal joined string handed to the install step: each
/// accepted keyword is appended with a leading space, in order, duplicates
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet {
    joined: String,
}

impl PermissionSet {
    pub fn new() -> Self {
        PermissionSet::default()
    }

    /// Validate `token` and append it.
    ///
    /// Returns false, leaving the set untouched, when `token` is not a
    /// permission keyword.
    pub fn push(&mut self, token: &str) -> bool {
        match token.parse::<Permission>() {
            Ok(permission) => {
                self.joined.push(' ');
                self.joined.push_str(permission.as_str());
                true
            }
            Err(()) => false,
        }
    }

    /// The literal accumulated string, e.g. `" OWNER_READ OWNER_WRITE"`.
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    /// Accumulated permissions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.joined
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
    }

    /// Combined POSIX mode of every accumulated permission.
    pub fn mode(&self) -> u32 {
        self.iter().fold(0, |mode, p| mode | p.mode_bits())
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.joined.trim_start())
    }
}
