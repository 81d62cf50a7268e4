//! `harbour-install plan` command

use anyhow::{Context, Result};

use crate::cli::{OutputFormat, PlanArgs};
use harbour_install::install::{self, InstallContext, InstallRule};
use harbour_install::util::config::{global_config_path, load_config, project_config_path};
use harbour_install::{HostFs, TargetSet};

pub fn execute(args: PlanArgs) -> Result<()> {
    let source_dir = match args.source_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let config = load_config(
        global_config_path().as_deref(),
        &project_config_path(&source_dir),
    );

    let mut registry = match &args.manifest {
        Some(path) => TargetSet::load(path)?,
        None => TargetSet::new(),
    };
    for spec in &args.targets {
        registry.add_spec(spec)?;
    }

    let platform = args.platform.unwrap_or_else(|| config.platform());
    tracing::debug!(
        "planning for {} platform with {} declared target(s)",
        platform,
        registry.len()
    );

    let fs = HostFs;
    let ctx = InstallContext::new(&registry, &fs, source_dir)
        .with_platform(platform)
        .with_unused_destination_warnings(
            config.warn_unused_destinations() && !args.no_warn_unused,
        );

    let mut rules: Vec<InstallRule> = Vec::new();
    install::execute(&ctx, &args.tokens, &mut rules)?;

    match args.format {
        OutputFormat::Text => {
            if rules.is_empty() {
                println!("(no rules)");
            }
            for rule in &rules {
                println!("{}", rule);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rules).context("failed to serialize rules")?;
            println!("{}", json);
        }
    }

    Ok(())
}
