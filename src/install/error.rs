//! Install directive error types and diagnostics.

use thiserror::Error;

use crate::core::TargetKind;
use crate::install::Mode;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while interpreting an `install()` directive.
///
/// Any of these aborts the whole directive; no rule from it is registered.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum InstallError {
    #[error("called with unknown mode {mode}")]
    #[diagnostic(code(harbour::install::unknown_mode))]
    UnknownMode { mode: String },

    #[error("{mode} given no value for {keyword} argument.")]
    #[diagnostic(code(harbour::install::missing_value))]
    MissingValue { mode: Mode, keyword: &'static str },

    #[error("{}", not_a_file_message(.mode, .path))]
    #[diagnostic(
        code(harbour::install::not_a_file),
        help("install() takes files here, not directories")
    )]
    NotAFile { mode: Mode, path: String },

    #[error("TARGETS given target \"{name}\" which does not exist in this directory.")]
    #[diagnostic(code(harbour::install::unknown_target))]
    UnknownTarget { name: String },

    #[error("TARGETS given target \"{name}\" which is not an executable, library, or module.")]
    #[diagnostic(code(harbour::install::invalid_target_type))]
    InvalidTargetType { name: String, kind: TargetKind },

    #[error("{mode} given no DESTINATION!")]
    #[diagnostic(code(harbour::install::missing_destination))]
    MissingDestination { mode: Mode },

    #[error("TARGETS given no LIBRARY DESTINATION for {} target \"{target}\".", .kind.describe())]
    #[diagnostic(code(harbour::install::missing_library_destination))]
    MissingLibraryDestination { target: String, kind: TargetKind },

    #[error("TARGETS given no RUNTIME DESTINATION for executable target \"{target}\".")]
    #[diagnostic(code(harbour::install::missing_runtime_destination))]
    MissingRuntimeDestination { target: String },

    #[error("{mode} given invalid permission \"{permission}\".")]
    #[diagnostic(code(harbour::install::invalid_permission))]
    InvalidPermission { mode: Mode, permission: String },

    #[error("{mode} given RENAME option with more than one file.")]
    #[diagnostic(code(harbour::install::rename_requires_single_file))]
    RenameRequiresSingleFile { mode: Mode, files: usize },

    #[error("{mode} given unknown argument \"{argument}\".")]
    #[diagnostic(code(harbour::install::unknown_argument))]
    UnknownArgument { mode: Mode, argument: String },
}

fn not_a_file_message(mode: &Mode, path: &str) -> String {
    match mode {
        Mode::Script => "SCRIPT given a directory as value of SCRIPT argument.".to_string(),
        _ => format!("{} given directory \"{}\" to install.", mode, path),
    }
}

impl InstallError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            InstallError::UnknownMode { .. } => diag.with_suggestion(suggestions::MODES),

            InstallError::MissingValue { keyword, .. } => {
                diag.with_suggestion(format!("Follow `{}` with a value", keyword))
            }

            InstallError::NotAFile {
                mode: Mode::Script,
                path,
            } => diag
                .with_context(format!("\"{}\" is a directory", path))
                .with_suggestion("Point SCRIPT at a single script file"),

            InstallError::NotAFile { .. } => diag
                .with_suggestion("Name the individual files inside the directory instead"),

            InstallError::UnknownTarget { .. } => {
                diag.with_suggestion(suggestions::TARGET_NOT_FOUND)
            }

            InstallError::InvalidTargetType { kind, .. } => diag
                .with_context(format!("target is a {}", kind.describe()))
                .with_suggestion("Install its headers with install(FILES ...) instead"),

            InstallError::MissingDestination { .. } => {
                diag.with_suggestion(suggestions::ADD_DESTINATION)
            }

            InstallError::MissingLibraryDestination { .. } => {
                diag.with_suggestion("Add `LIBRARY DESTINATION <dir>` to the directive")
            }

            InstallError::MissingRuntimeDestination { .. } => {
                diag.with_suggestion("Add `RUNTIME DESTINATION <dir>` to the directive")
            }

            InstallError::InvalidPermission { .. } => {
                diag.with_suggestion(suggestions::PERMISSIONS)
            }

            InstallError::RenameRequiresSingleFile { files, .. } => diag
                .with_context(format!("{} files were given", files))
                .with_suggestion("Split the directive so each renamed file has its own install()"),

            InstallError::UnknownArgument { .. } => diag.with_suggestion(
                "Only one value follows DESTINATION or RENAME; list items before any keyword",
            ),
        }
    }
}
