//! Filesystem predicates and path formatting.

use std::path::Path;

/// Read-only filesystem queries the install interpreter depends on.
///
/// Implemented by [`HostFs`] for real builds and by the in-memory mock
/// filesystem in tests.
pub trait PathPredicates {
    /// Whether `path` is a full path (not relative to any directory).
    fn is_absolute(&self, path: &Path) -> bool;

    /// Whether `path` names an existing directory.
    fn is_directory(&self, path: &Path) -> bool;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl PathPredicates for HostFs {
    fn is_absolute(&self, path: &Path) -> bool {
        // `/foo` has a root but no prefix on Windows; it still counts as full.
        path.is_absolute() || path.has_root() || has_drive_prefix(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// `C:/...` or `C:\...`, recognized on every host.
fn has_drive_prefix(path: &Path) -> bool {
    let s = path.to_string_lossy();
    let bytes = s.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Normalize a path string to forward slashes.
///
/// Backslashes become `/`, runs of separators collapse (a leading `//`
/// network prefix is kept) and trailing separators are dropped unless the
/// path is a bare root such as `/` or `C:/`. Applying it twice is the same
/// as applying it once.
pub fn to_unix_slashes(path: &str) -> String {
    let replaced = path.replace('\\', "/");
    let network = replaced.starts_with("//") && !replaced.starts_with("///");

    let mut out = String::with_capacity(replaced.len());
    let mut prev_slash = false;
    for c in replaced.chars() {
        if c == '/' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    if network {
        out.insert(0, '/');
    }

    while out.ends_with('/') && !is_bare_root(&out) {
        out.pop();
    }
    out
}

fn is_bare_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    path == "/"
        || path == "//"
        || (bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
