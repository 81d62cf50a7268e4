//! Destination path resolution.

use std::path::Path;

use crate::util::fs::{to_unix_slashes, PathPredicates};

/// Placeholder for the install prefix, substituted when the install step runs.
pub const INSTALL_PREFIX_PLACEHOLDER: &str = "${CMAKE_INSTALL_PREFIX}";

/// Resolve a raw `DESTINATION` value.
///
/// Absent values resolve to an empty string. Absolute values are kept,
/// relative ones are placed under [`INSTALL_PREFIX_PLACEHOLDER`]. Either way
/// the result uses forward slashes and has no trailing separator.
pub fn resolve_destination(fs: &dyn PathPredicates, destination: Option<&str>) -> String {
    let Some(destination) = destination else {
        return String::new();
    };

    let dest = if fs.is_absolute(Path::new(destination)) {
        destination.to_string()
    } else {
        format!("{}/{}", INSTALL_PREFIX_PLACEHOLDER, destination)
    };

    to_unix_slashes(&dest)
}
