//! The `install()` directive.
//!
//! A directive is a flat list of tokens. The first token selects the mode:
//!
//! ```text
//! install(SCRIPT <path> [SCRIPT <path> ...])
//! install(TARGETS <name>... [LIBRARY|RUNTIME] [DESTINATION <dir>] ...)
//! install(FILES|PROGRAMS <path>... [DESTINATION <dir>] [PERMISSIONS <perm>...] [RENAME <name>])
//! ```
//!
//! Each mode has its own parser that turns the remaining tokens into
//! [`InstallRule`]s. Rules are collected first and only handed to the
//! [`RuleSink`] once the whole directive has been accepted, so a failing
//! directive registers nothing.

pub mod context;
pub mod destination;
pub mod error;
pub mod files;
pub mod permissions;
pub mod rule;
pub mod script;
pub mod targets;

use std::fmt;

pub use context::{InstallContext, RuleSink};
pub use destination::{resolve_destination, INSTALL_PREFIX_PLACEHOLDER};
pub use error::InstallError;
pub use permissions::{Permission, PermissionSet};
pub use rule::{ArtifactRole, FilesRule, InstallRule, ScriptRule, TargetRule};

use files::FilesParser;
use script::ScriptParser;
use targets::TargetsParser;

/// Top-level branch of the directive grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Script,
    Targets,
    Files,
    /// FILES whose contents are executable
    Programs,
}

impl Mode {
    /// Recognize a mode keyword.
    pub fn from_keyword(keyword: &str) -> Option<Mode> {
        match keyword {
            "SCRIPT" => Some(Mode::Script),
            "TARGETS" => Some(Mode::Targets),
            "FILES" => Some(Mode::Files),
            "PROGRAMS" => Some(Mode::Programs),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Mode::Script => "SCRIPT",
            Mode::Targets => "TARGETS",
            Mode::Files => "FILES",
            Mode::Programs => "PROGRAMS",
        }
    }

    pub fn is_program(&self) -> bool {
        matches!(self, Mode::Programs)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Interpret one directive without registering anything.
///
/// An empty argument list is accepted and yields no rules, so directives
/// built from an empty variable are harmless.
pub fn plan<S: AsRef<str>>(
    ctx: &InstallContext<'_>,
    args: &[S],
) -> Result<Vec<InstallRule>, InstallError> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    let Some(&first) = args.first() else {
        return Ok(Vec::new());
    };

    let mode = Mode::from_keyword(first).ok_or_else(|| InstallError::UnknownMode {
        mode: first.to_string(),
    })?;
    tracing::debug!("install({}) with {} argument(s)", mode, args.len() - 1);

    match mode {
        // SCRIPT pairs are matched anywhere, including the mode keyword itself
        Mode::Script => ScriptParser::new(ctx).parse(&args),
        Mode::Targets => TargetsParser::new(ctx).parse(&args[1..]),
        Mode::Files | Mode::Programs => FilesParser::new(ctx, mode).parse(&args[1..]),
    }
}

/// Interpret one directive and register its rules with `sink`.
///
/// Returns the number of rules registered. On error `sink` is untouched.
pub fn execute<S: AsRef<str>>(
    ctx: &InstallContext<'_>,
    args: &[S],
    sink: &mut dyn RuleSink,
) -> Result<usize, InstallError> {
    let rules = plan(ctx, args)?;
    let count = rules.len();
    for rule in rules {
        sink.register(rule);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dll_context, sample_targets, unix_context, MockFileSystem};

    #[test]
    fn test_empty_directive_is_noop() {
        let registry = sample_targets();
        let fs = MockFileSystem::new();
        let ctx = unix_context(&registry, &fs);

        let mut sink: Vec<InstallRule> = Vec::new();
        let empty: [&str; 0] = [];
        assert_eq!(execute(&ctx, &empty, &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unknown_mode() {
        let registry = sample_targets();
        let fs = MockFileSystem::new();
        let ctx = unix_context(&registry, &fs);

        for first in ["DIRECTORY", "files", "", "DESTINATION"] {
            let mut sink: Vec<InstallRule> = Vec::new();
            let err = execute(&ctx, &[first, "a.txt", "DESTINATION", "x"], &mut sink).unwrap_err();
            assert!(
                matches!(err, InstallError::UnknownMode { ref mode } if mode == first),
                "{}",
                first
            );
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn test_dispatch_to_each_mode() {
        let registry = sample_targets();
        let fs = MockFileSystem::new();
        let ctx = dll_context(&registry, &fs);

        let rules = plan(&ctx, &["SCRIPT", "post.cmake"]).unwrap();
        assert!(matches!(rules[..], [InstallRule::Script(_)]));

        let rules = plan(&ctx, &["TARGETS", "app", "DESTINATION", "bin"]).unwrap();
        assert!(matches!(rules[..], [InstallRule::Target(_)]));

        let rules = plan(&ctx, &["FILES", "a.h", "DESTINATION", "include"]).unwrap();
        assert!(matches!(&rules[..], [InstallRule::Files(f)] if !f.program));

        let rules = plan(&ctx, &["PROGRAMS", "tool.sh", "DESTINATION", "bin"]).unwrap();
        assert!(matches!(&rules[..], [InstallRule::Files(f)] if f.program));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let registry = sample_targets();
        let fs = MockFileSystem::new();
        let ctx = unix_context(&registry, &fs);

        let args: Vec<String> = "FILES a.txt DESTINATION lib"
            .split_whitespace()
            .map(String::from)
            .collect();
        assert_eq!(plan(&ctx, &args).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_directive_leaves_sink_untouched() {
        let registry = sample_targets();
        let fs = MockFileSystem::new();
        let ctx = unix_context(&registry, &fs);

        let mut sink: Vec<InstallRule> = Vec::new();
        execute(&ctx, &["SCRIPT", "first.cmake"], &mut sink).unwrap();

        let err = execute(
            &ctx,
            &["SCRIPT", "second.cmake", "SCRIPT"],
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, InstallError::MissingValue { .. }));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_mode_keywords() {
        for mode in [Mode::Script, Mode::Targets, Mode::Files, Mode::Programs] {
            assert_eq!(Mode::from_keyword(mode.keyword()), Some(mode));
        }
        assert!(Mode::Programs.is_program());
        assert!(!Mode::Files.is_program());
        assert_eq!(Mode::from_keyword("Files"), None);
    }
}
