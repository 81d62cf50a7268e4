//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use harbour_install::PlatformFamily;

/// harbour-install - interpret install() directives into installation rules
#[derive(Parser)]
#[command(name = "harbour-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret one install() directive and print its rules
    Plan(PlanArgs),

    /// List the permissions accepted by PERMISSIONS
    Permissions,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// TOML file with a [targets] table mapping names to kinds
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Declare a target as NAME=KIND (repeatable)
    #[arg(long = "target", value_name = "NAME=KIND")]
    pub targets: Vec<String>,

    /// Platform family (dll, unix, or a target triple); defaults to config, then host
    #[arg(long, env = "HARBOUR_INSTALL_PLATFORM")]
    pub platform: Option<PlatformFamily>,

    /// Directory relative scripts and files are resolved against (defaults to current directory)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Do not warn about destinations no listed target uses
    #[arg(long)]
    pub no_warn_unused: bool,

    /// Directive arguments, starting with the mode keyword
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per rule
    Text,
    /// JSON array of rules
    Json,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
