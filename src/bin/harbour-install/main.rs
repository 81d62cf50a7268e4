//! harbour-install CLI - interpret `install()` directives

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use harbour_install::util::diagnostic;
use harbour_install::InstallError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<InstallError>() {
            Some(install_err) => diagnostic::emit(&install_err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("harbour_install=debug")
    } else {
        EnvFilter::new("harbour_install=info")
    };

    // Rules go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => commands::plan::execute(args),
        Commands::Permissions => commands::permissions::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
