//! `install(TARGETS <name>... [LIBRARY|RUNTIME] [DESTINATION <dir>] ...)`
//!
//! Each listed target becomes one or two target rules. Executables use the
//! runtime destination, static libraries and modules the library
//! destination. Shared libraries depend on the platform family: on DLL
//! platforms the import library follows LIBRARY and the DLL follows
//! RUNTIME, elsewhere the single shared object follows LIBRARY.

use crate::core::{Target, TargetKind};
use crate::install::context::InstallContext;
use crate::install::destination::resolve_destination;
use crate::install::error::InstallError;
use crate::install::rule::{ArtifactRole, InstallRule, TargetRule};
use crate::install::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Bare tokens are target names
    CollectingTargets,
    /// The next token is a destination for the current scope
    AwaitDestination,
    /// Only keywords are accepted
    Idle,
}

/// Which destinations a `DESTINATION` value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Before any LIBRARY/RUNTIME keyword
    All,
    Library,
    Runtime,
}

impl Scope {
    fn library(self) -> bool {
        matches!(self, Scope::All | Scope::Library)
    }

    fn runtime(self) -> bool {
        matches!(self, Scope::All | Scope::Runtime)
    }
}

/// Parser for the TARGETS mode.
pub struct TargetsParser<'c, 'a> {
    ctx: &'c InstallContext<'a>,
    state: State,
    scope: Scope,
    targets: Vec<Target>,
    library_destination: Option<String>,
    runtime_destination: Option<String>,
}

impl<'c, 'a> TargetsParser<'c, 'a> {
    pub fn new(ctx: &'c InstallContext<'a>) -> Self {
        TargetsParser {
            ctx,
            state: State::CollectingTargets,
            scope: Scope::All,
            targets: Vec::new(),
            library_destination: None,
            runtime_destination: None,
        }
    }

    /// Run the parser over the arguments following `TARGETS`.
    pub fn parse(mut self, args: &[&str]) -> Result<Vec<InstallRule>, InstallError> {
        for token in args {
            self.step(token)?;
        }
        self.finish()
    }

    fn step(&mut self, token: &str) -> Result<(), InstallError> {
        match token {
            "DESTINATION" => {
                self.state = State::AwaitDestination;
            }
            "LIBRARY" => {
                self.state = State::Idle;
                self.scope = Scope::Library;
            }
            "RUNTIME" => {
                self.state = State::Idle;
                self.scope = Scope::Runtime;
            }
            _ => match self.state {
                State::CollectingTargets => {
                    let target = self.lookup(token)?;
                    self.targets.push(target);
                }
                State::AwaitDestination => {
                    if self.scope.library() {
                        self.library_destination = Some(token.to_string());
                    }
                    if self.scope.runtime() {
                        self.runtime_destination = Some(token.to_string());
                    }
                    self.state = State::Idle;
                }
                State::Idle => {
                    return Err(InstallError::UnknownArgument {
                        mode: Mode::Targets,
                        argument: token.to_string(),
                    });
                }
            },
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<Target, InstallError> {
        let target =
            self.ctx
                .registry
                .find_target(name)
                .ok_or_else(|| InstallError::UnknownTarget {
                    name: name.to_string(),
                })?;

        if !target.kind.is_installable() {
            return Err(InstallError::InvalidTargetType {
                name: name.to_string(),
                kind: target.kind,
            });
        }

        Ok(target.clone())
    }

    fn finish(self) -> Result<Vec<InstallRule>, InstallError> {
        if self.targets.is_empty() {
            tracing::debug!("install(TARGETS) lists no targets, nothing to do");
            return Ok(Vec::new());
        }
        if self.state == State::AwaitDestination {
            return Err(InstallError::MissingValue {
                mode: Mode::Targets,
                keyword: "DESTINATION",
            });
        }
        if self.library_destination.is_none() && self.runtime_destination.is_none() {
            return Err(InstallError::MissingDestination {
                mode: Mode::Targets,
            });
        }

        let library_dest = resolve_destination(self.ctx.fs, self.library_destination.as_deref());
        let runtime_dest = resolve_destination(self.ctx.fs, self.runtime_destination.as_deref());
        let has_library = self.library_destination.is_some();
        let has_runtime = self.runtime_destination.is_some();

        let mut rules = Vec::new();
        let mut library_used = false;
        let mut runtime_used = false;

        let rule = |target: &Target, role: ArtifactRole, import_library: bool| {
            let destination = match role {
                ArtifactRole::Library => library_dest.clone(),
                ArtifactRole::Runtime => runtime_dest.clone(),
            };
            tracing::debug!(
                "install target {} ({}) to {}{}",
                target.name,
                role,
                destination,
                if import_library { " as import library" } else { "" }
            );
            InstallRule::from(TargetRule {
                target: target.clone(),
                role,
                destination,
                import_library,
            })
        };

        for target in &self.targets {
            match target.kind {
                // DLL platforms split the import library from the runtime DLL
                TargetKind::SharedLib if self.ctx.platform.is_dll() => {
                    if has_library {
                        rules.push(rule(target, ArtifactRole::Library, true));
                        library_used = true;
                    }
                    if has_runtime {
                        rules.push(rule(target, ArtifactRole::Runtime, false));
                        runtime_used = true;
                    }
                }
                TargetKind::SharedLib => {
                    if has_library {
                        rules.push(rule(target, ArtifactRole::Library, false));
                        library_used = true;
                    }
                }
                TargetKind::StaticLib | TargetKind::ModuleLib => {
                    if !has_library {
                        return Err(InstallError::MissingLibraryDestination {
                            target: target.name.clone(),
                            kind: target.kind,
                        });
                    }
                    rules.push(rule(target, ArtifactRole::Library, false));
                    library_used = true;
                }
                TargetKind::Exe => {
                    if !has_runtime {
                        return Err(InstallError::MissingRuntimeDestination {
                            target: target.name.clone(),
                        });
                    }
                    rules.push(rule(target, ArtifactRole::Runtime, false));
                    runtime_used = true;
                }
                // Rejected during lookup
                TargetKind::HeaderOnly => {}
            }
        }

        if self.ctx.warn_unused_destinations {
            if has_library && !library_used {
                tracing::warn!(
                    "install(TARGETS) LIBRARY DESTINATION \"{}\" is not used by any listed target",
                    library_dest
                );
            }
            if has_runtime && !runtime_used {
                tracing::warn!(
                    "install(TARGETS) RUNTIME DESTINATION \"{}\" is not used by any listed target",
                    runtime_dest
                );
            }
        }

        Ok(rules)
    }
}
