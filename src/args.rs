// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "git_versioning",
    version = VERSION,
    about = "Print a package version annotated with git revision info, or persist that info for packaging"
)]
pub struct Args {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Package directory holding the git checkout or the GIT_VERSION record
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Log resolution steps to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Version fields, either given directly or read from a config file.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SpecArgs {
    /// JSON (or YAML with the `yaml` feature) file with major/minor/bugfix/dev
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub major: Option<u64>,

    #[arg(long, global = true)]
    pub minor: Option<u64>,

    #[arg(long, global = true)]
    pub bugfix: Option<u64>,

    /// Mark this as a development version
    #[arg(long, global = true)]
    pub dev: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the version: git version for dev builds, semantic version otherwise (default)
    Show,
    /// Print `major[.minor[.bugfix]][dev]`
    Semantic,
    /// Print the semantic version with `-r<count>-<hash>` when known
    Git,
    /// Print every rendering together with the raw revision fields
    Info {
        #[arg(long, value_enum, default_value = "text")]
        format: InfoFormat,
    },
    /// Write the GIT_VERSION record for packaged distributions
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InfoFormat {
    Text,
    Json,
}
