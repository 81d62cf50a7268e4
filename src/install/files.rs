//! `install(FILES|PROGRAMS <path>... [DESTINATION <dir>] [PERMISSIONS <perm>...] [RENAME <name>])`

use std::path::PathBuf;

use crate::install::context::InstallContext;
use crate::install::destination::resolve_destination;
use crate::install::error::InstallError;
use crate::install::permissions::PermissionSet;
use crate::install::rule::{FilesRule, InstallRule};
use crate::install::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Bare tokens are files to install
    CollectingFiles,
    /// The next token is the destination
    AwaitDestination,
    /// Bare tokens are permission keywords
    CollectingPermissions,
    /// The next token is the new file name
    AwaitRename,
    /// Only keywords are accepted
    Idle,
}

/// Parser for the FILES and PROGRAMS modes.
pub struct FilesParser<'c, 'a> {
    ctx: &'c InstallContext<'a>,
    mode: Mode,
    state: State,
    files: Vec<PathBuf>,
    destination: Option<String>,
    permissions: PermissionSet,
    rename: Option<String>,
}

impl<'c, 'a> FilesParser<'c, 'a> {
    /// `mode` is either [`Mode::Files`] or [`Mode::Programs`].
    pub fn new(ctx: &'c InstallContext<'a>, mode: Mode) -> Self {
        FilesParser {
            ctx,
            mode,
            state: State::CollectingFiles,
            files: Vec::new(),
            destination: None,
            permissions: PermissionSet::new(),
            rename: None,
        }
    }

    /// Run the parser over the arguments following the mode keyword.
    pub fn parse(mut self, args: &[&str]) -> Result<Vec<InstallRule>, InstallError> {
        for token in args {
            self.step(token)?;
        }
        self.finish()
    }

    fn step(&mut self, token: &str) -> Result<(), InstallError> {
        match token {
            "DESTINATION" => self.state = State::AwaitDestination,
            "PERMISSIONS" => self.state = State::CollectingPermissions,
            "RENAME" => self.state = State::AwaitRename,
            _ => match self.state {
                State::CollectingFiles => {
                    let file = self.ctx.full_path(token);
                    if self.ctx.fs.is_directory(&file) {
                        return Err(InstallError::NotAFile {
                            mode: self.mode,
                            path: token.to_string(),
                        });
                    }
                    self.files.push(file);
                }
                State::AwaitDestination => {
                    self.destination = Some(token.to_string());
                    self.state = State::Idle;
                }
                State::CollectingPermissions => {
                    if !self.permissions.push(token) {
                        return Err(InstallError::InvalidPermission {
                            mode: self.mode,
                            permission: token.to_string(),
                        });
                    }
                }
                State::AwaitRename => {
                    self.rename = Some(token.to_string());
                    self.state = State::Idle;
                }
                State::Idle => {
                    return Err(InstallError::UnknownArgument {
                        mode: self.mode,
                        argument: token.to_string(),
                    });
                }
            },
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<InstallRule>, InstallError> {
        if self.files.is_empty() {
            tracing::debug!("install({}) lists no files, nothing to do", self.mode);
            return Ok(Vec::new());
        }

        match self.state {
            State::AwaitDestination => {
                return Err(InstallError::MissingValue {
                    mode: self.mode,
                    keyword: "DESTINATION",
                })
            }
            State::AwaitRename => {
                return Err(InstallError::MissingValue {
                    mode: self.mode,
                    keyword: "RENAME",
                })
            }
            _ => {}
        }

        let Some(destination) = self.destination.as_deref() else {
            return Err(InstallError::MissingDestination { mode: self.mode });
        };

        // An empty RENAME value means no rename
        let rename = self.rename.filter(|name| !name.is_empty());
        if rename.is_some() && self.files.len() > 1 {
            return Err(InstallError::RenameRequiresSingleFile {
                mode: self.mode,
                files: self.files.len(),
            });
        }

        let destination = resolve_destination(self.ctx.fs, Some(destination));
        tracing::debug!(
            "install {} {} file(s) to {}",
            self.mode,
            self.files.len(),
            destination
        );

        Ok(vec![FilesRule {
            files: self.files,
            destination,
            program: self.mode.is_program(),
            permissions: self.permissions,
            rename,
        }
        .into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetSet;
    use crate::test_support::{unix_context, MockFileSystem};

    fn parse_with(
        fs: &MockFileSystem,
        mode: Mode,
        args: &[&str],
    ) -> Result<Vec<InstallRule>, InstallError> {
        let registry = TargetSet::new();
        let ctx = unix_context(&registry, fs);
        FilesParser::new(&ctx, mode).parse(args)
    }

    fn parse(args: &[&str]) -> Result<Vec<InstallRule>, InstallError> {
        parse_with(&MockFileSystem::new(), Mode::Files, args)
    }

    fn single_files_rule(rules: Vec<InstallRule>) -> FilesRule {
        assert_eq!(rules.len(), 1);
        match rules.into_iter().next() {
            Some(InstallRule::Files(rule)) => rule,
            other => panic!("unexpected rule {:?}", other),
        }
    }

    #[test]
    fn test_files_with_destination() {
        let rule = single_files_rule(
            parse(&["a.txt", "/abs/b.txt", "DESTINATION", "share/doc"]).unwrap(),
        );
        assert_eq!(
            rule.files,
            vec![
                PathBuf::from("/project/src/a.txt"),
                PathBuf::from("/abs/b.txt")
            ]
        );
        assert_eq!(rule.destination, "${CMAKE_INSTALL_PREFIX}/share/doc");
        assert!(!rule.program);
        assert!(rule.permissions.is_empty());
        assert_eq!(rule.rename, None);
    }

    #[test]
    fn test_programs_sets_flag() {
        let rules =
            parse_with(&MockFileSystem::new(), Mode::Programs, &["run.sh", "DESTINATION", "bin"])
                .unwrap();
        assert!(single_files_rule(rules).program);
    }

    #[test]
    fn test_no_files_is_noop() {
        assert!(parse(&[]).unwrap().is_empty());
        assert!(parse(&["DESTINATION", "lib"]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_destination() {
        let err = parse(&["a.txt", "PERMISSIONS", "OWNER_READ"]).unwrap_err();
        assert_eq!(err.to_string(), "FILES given no DESTINATION!");
    }

    #[test]
    fn test_rename_requires_single_file() {
        let err = parse(&["a.txt", "b.txt", "DESTINATION", "lib", "RENAME", "x.txt"]).unwrap_err();
        assert!(matches!(
            err,
            InstallError::RenameRequiresSingleFile { files: 2, .. }
        ));
    }

    #[test]
    fn test_rename_single_file() {
        let rule = single_files_rule(
            parse(&["config.in", "RENAME", "config.h", "DESTINATION", "include"]).unwrap(),
        );
        assert_eq!(rule.rename.as_deref(), Some("config.h"));
    }

    #[test]
    fn test_empty_rename_is_ignored() {
        let rule = single_files_rule(
            parse(&["a.txt", "b.txt", "DESTINATION", "lib", "RENAME", ""]).unwrap(),
        );
        assert_eq!(rule.rename, None);
        assert_eq!(rule.files.len(), 2);
    }

    #[test]
    fn test_permissions_accumulate_literally() {
        let rule = single_files_rule(
            parse(&[
                "foo.sh",
                "PERMISSIONS",
                "OWNER_READ",
                "OWNER_EXECUTE",
                "OWNER_READ",
                "DESTINATION",
                "bin",
            ])
            .unwrap(),
        );
        assert_eq!(rule.permissions.as_str(), " OWNER_READ OWNER_EXECUTE OWNER_READ");
        assert_eq!(rule.permissions.mode(), 0o500);
    }

    #[test]
    fn test_invalid_permission_aborts() {
        let err = parse(&["foo.sh", "PERMISSIONS", "OWNER_READ", "BOGUS"]).unwrap_err();
        match &err {
            InstallError::InvalidPermission { mode, permission } => {
                assert_eq!(*mode, Mode::Files);
                assert_eq!(permission, "BOGUS");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_rejected() {
        let mut fs = MockFileSystem::new();
        fs.add_dir("/project/src/docs");
        let err = parse_with(&fs, Mode::Programs, &["docs", "DESTINATION", "share"]).unwrap_err();
        assert_eq!(err.to_string(), "PROGRAMS given directory \"docs\" to install.");
    }

    #[test]
    fn test_second_destination_value_is_unknown_argument() {
        let err = parse(&["a.txt", "DESTINATION", "lib", "more.txt"]).unwrap_err();
        assert!(matches!(
            err,
            InstallError::UnknownArgument { ref argument, .. } if argument == "more.txt"
        ));
    }

    #[test]
    fn test_dangling_value_keywords() {
        let err = parse(&["a.txt", "DESTINATION"]).unwrap_err();
        assert!(matches!(
            err,
            InstallError::MissingValue {
                keyword: "DESTINATION",
                ..
            }
        ));

        let err = parse(&["a.txt", "DESTINATION", "lib", "RENAME"]).unwrap_err();
        assert!(matches!(
            err,
            InstallError::MissingValue {
                keyword: "RENAME",
                ..
            }
        ));
    }

    #[test]
    fn test_files_after_keyword_section_resume_nothing() {
        // Once a keyword is seen, bare tokens no longer add files.
        let err = parse(&["a.txt", "RENAME", "b.txt", "c.txt"]).unwrap_err();
        assert!(matches!(err, InstallError::UnknownArgument { .. }));
    }
}
