use anyhow::{anyhow, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use tracing_subscriber::EnvFilter;

mod cli;
mod manifest;
mod period;
mod staging;

use cli::RootArgs;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_logging(args.verbose);
    run(&args)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(args: &RootArgs) -> Result<()> {
    let config = args.manifest_config();
    let manifest = manifest::build_manifest(&config)?;
    if args.strict {
        manifest::ensure_no_diagnostics(&manifest)?;
    }

    if args.dry_run {
        let bytes = manifest::render_manifest(&manifest)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    if args.check {
        if !manifest::is_up_to_date(&config, &manifest)? {
            return Err(anyhow!(
                "{} is stale; rerun without --check to regenerate",
                config.output_path.display()
            ));
        }
        println!("{} up to date", config.output_name());
        return Ok(());
    }

    manifest::write_manifest(&config, &manifest)?;
    println!("{} generated", config.output_name());
    Ok(())
}
