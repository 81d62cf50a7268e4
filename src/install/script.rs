//! `install(SCRIPT <path> [SCRIPT <path> ...])`

use crate::install::context::InstallContext;
use crate::install::error::InstallError;
use crate::install::rule::{InstallRule, ScriptRule};
use crate::install::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between pairs
    Idle,
    /// Saw `SCRIPT`, the next token is its path
    AwaitPath,
}

/// Parser for the SCRIPT mode.
pub struct ScriptParser<'c, 'a> {
    ctx: &'c InstallContext<'a>,
    state: State,
    rules: Vec<InstallRule>,
}

impl<'c, 'a> ScriptParser<'c, 'a> {
    pub fn new(ctx: &'c InstallContext<'a>) -> Self {
        ScriptParser {
            ctx,
            state: State::Idle,
            rules: Vec::new(),
        }
    }

    /// Run the parser over every directive argument, mode keyword included.
    pub fn parse(mut self, args: &[&str]) -> Result<Vec<InstallRule>, InstallError> {
        for token in args {
            self.step(token)?;
        }
        self.finish()
    }

    fn step(&mut self, token: &str) -> Result<(), InstallError> {
        if token == "SCRIPT" {
            self.state = State::AwaitPath;
            return Ok(());
        }

        match self.state {
            // Stray tokens between pairs are ignored
            State::Idle => Ok(()),
            State::AwaitPath => {
                self.state = State::Idle;
                let path = self.ctx.full_path(token);
                if self.ctx.fs.is_directory(&path) {
                    return Err(InstallError::NotAFile {
                        mode: Mode::Script,
                        path: token.to_string(),
                    });
                }
                tracing::debug!("install script {}", path.display());
                self.rules.push(ScriptRule { path }.into());
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<Vec<InstallRule>, InstallError> {
        if self.state == State::AwaitPath {
            return Err(InstallError::MissingValue {
                mode: Mode::Script,
                keyword: "SCRIPT",
            });
        }
        Ok(self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::TargetSet;
    use crate::test_support::{unix_context, MockFileSystem};

    fn parse(fs: &MockFileSystem, args: &[&str]) -> Result<Vec<InstallRule>, InstallError> {
        let registry = TargetSet::new();
        let ctx = unix_context(&registry, fs);
        ScriptParser::new(&ctx).parse(args)
    }

    fn script_paths(rules: &[InstallRule]) -> Vec<PathBuf> {
        rules
            .iter()
            .map(|r| match r {
                InstallRule::Script(s) => s.path.clone(),
                other => panic!("unexpected rule {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_multiple_scripts_in_order() {
        let fs = MockFileSystem::new();
        let rules = parse(
            &fs,
            &["SCRIPT", "pre.cmake", "SCRIPT", "/abs/post.cmake"],
        )
        .unwrap();

        assert_eq!(
            script_paths(&rules),
            vec![
                PathBuf::from("/project/src/pre.cmake"),
                PathBuf::from("/abs/post.cmake")
            ]
        );
    }

    #[test]
    fn test_trailing_keyword_is_missing_value() {
        let fs = MockFileSystem::new();
        let err = parse(&fs, &["SCRIPT", "a.cmake", "SCRIPT"]).unwrap_err();
        assert!(matches!(
            err,
            InstallError::MissingValue {
                mode: Mode::Script,
                keyword: "SCRIPT"
            }
        ));
        assert_eq!(
            err.to_string(),
            "SCRIPT given no value for SCRIPT argument."
        );
    }

    #[test]
    fn test_bare_mode_keyword_is_missing_value() {
        let fs = MockFileSystem::new();
        let err = parse(&fs, &["SCRIPT"]).unwrap_err();
        assert!(matches!(err, InstallError::MissingValue { .. }));
    }

    #[test]
    fn test_directory_is_rejected() {
        let mut fs = MockFileSystem::new();
        fs.add_dir("/project/src/cmake");

        let err = parse(&fs, &["SCRIPT", "ok.cmake", "SCRIPT", "cmake"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SCRIPT given a directory as value of SCRIPT argument."
        );
        match err {
            InstallError::NotAFile { mode, path } => {
                assert_eq!(mode, Mode::Script);
                assert_eq!(path, "cmake");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_repeated_keyword_rearms() {
        let fs = MockFileSystem::new();
        let rules = parse(&fs, &["SCRIPT", "SCRIPT", "x.cmake"]).unwrap();
        assert_eq!(script_paths(&rules), vec![PathBuf::from("/project/src/x.cmake")]);
    }
}
