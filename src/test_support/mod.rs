//! Test utilities and mocks for unit tests.
//!
//! Provides an in-memory filesystem implementing [`PathPredicates`] and
//! fixtures for the registries and contexts most tests need.
//!
//! # Example
//!
//! ```rust,ignore
//! use harbour_install::test_support::{sample_targets, unix_context, MockFileSystem};
//!
//! #[test]
//! fn test_example() {
//!     let registry = sample_targets();
//!     let mut fs = MockFileSystem::new();
//!     fs.add_dir("/project/src/docs");
//!
//!     let ctx = unix_context(&registry, &fs);
//!     // Interpret directives against ctx...
//! }
//! ```

pub mod fixtures;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::util::fs::PathPredicates;

pub use fixtures::*;

/// Mock filesystem for testing without real I/O.
///
/// Only tracks which paths are directories; everything else is treated as
/// a plain file. Paths starting with `/` or a drive letter are absolute.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    dirs: HashSet<PathBuf>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        MockFileSystem {
            dirs: HashSet::new(),
        }
    }

    /// Add a directory and all of its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let mut current = Some(path.as_ref());
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl PathPredicates for MockFileSystem {
    fn is_absolute(&self, path: &Path) -> bool {
        let s = path.to_string_lossy();
        let bytes = s.as_bytes();
        s.starts_with('/')
            || s.starts_with('\\')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_dirs() {
        let mut fs = MockFileSystem::new();
        fs.add_dir("/project/src/docs");

        assert!(fs.is_directory(Path::new("/project/src/docs")));
        assert!(fs.is_directory(Path::new("/project")));
        assert!(!fs.is_directory(Path::new("/project/src/docs/readme.md")));
    }

    #[test]
    fn test_mock_fs_absolute() {
        let fs = MockFileSystem::new();
        assert!(fs.is_absolute(Path::new("/usr")));
        assert!(fs.is_absolute(Path::new("C:/Windows")));
        assert!(!fs.is_absolute(Path::new("lib")));
        assert!(!fs.is_absolute(Path::new("${CMAKE_INSTALL_PREFIX}/lib")));
    }
}
