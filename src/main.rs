// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use git_versioning::{
    args::{Args, Command},
    config::load_spec,
    output::write_report,
};
use log::{LevelFilter, debug};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let spec = load_spec(&args.spec)?;
    let resolver = match args.dir {
        Some(dir) => git_versioning::resolver(spec, dir),
        None => git_versioning::resolver_in_current_dir(spec).context("reading current directory")?,
    };
    debug!("resolving {:?} in {}", resolver.spec(), resolver.base_dir().display());

    match args.command.unwrap_or(Command::Show) {
        Command::Show => println!("{}", resolver.version()),
        Command::Semantic => println!("{}", resolver.semantic_version()),
        Command::Git => println!("{}", resolver.git_version()),
        Command::Info { format } => write_report(&mut io::stdout().lock(), &resolver.report(), format)?,
        Command::Write => {
            let path = resolver.write_version_file()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
