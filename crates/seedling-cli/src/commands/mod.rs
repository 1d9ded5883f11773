//! CLI command definitions and dispatch.

pub mod list;
pub mod merge;
pub mod resolve;
pub mod validate;
pub mod values;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use seedling_common::config::ImageVectorConfig;
use seedling_common::constants::{COMPONENT_OVERRIDE_ENV, OVERRIDE_ENV};
use seedling_imagevector::{Catalog, FindOptions, overwrite, parse_version};
use semver::Version;

/// seedctl: Resolve container images for seed and shoot components.
#[derive(Parser, Debug)]
#[command(name = "seedctl", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Catalog file to use instead of the built-in one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Catalog file merged over the base catalog.
    #[arg(long, global = true, env = OVERRIDE_ENV)]
    pub overwrite: Option<PathBuf>,

    /// Document with component-specific catalogs.
    #[arg(long, global = true, env = COMPONENT_OVERRIDE_ENV)]
    pub components: Option<PathBuf>,
}

impl Cli {
    /// Catalog locations selected by the global flags.
    #[must_use]
    pub fn config(&self) -> ImageVectorConfig {
        ImageVectorConfig {
            catalog_path: self.catalog.clone(),
            override_path: self.overwrite.clone(),
            component_override_path: self.components.clone(),
        }
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the image of one component.
    Resolve(resolve::ResolveArgs),
    /// Resolve several components and print them as template values.
    Values(values::ValuesArgs),
    /// Merge an override catalog over a base catalog.
    Merge(merge::MergeArgs),
    /// Check that a catalog file loads.
    Validate(validate::ValidateArgs),
    /// List catalog entries.
    List(list::ListArgs),
}

/// Query flags shared by the resolving subcommands.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Version of the seed performing the deployment.
    #[arg(long, value_parser = parse_version)]
    pub runtime_version: Option<Version>,

    /// Version of the shoot being deployed into.
    #[arg(long, value_parser = parse_version)]
    pub target_version: Option<Version>,

    /// Architecture of the target node pool (e.g. amd64, arm64).
    #[arg(long = "arch")]
    pub architecture: Option<String>,
}

impl QueryArgs {
    /// Converts the flags into resolver options.
    #[must_use]
    pub fn into_options(self) -> FindOptions {
        FindOptions {
            runtime_version: self.runtime_version,
            target_version: self.target_version,
            architecture: self.architecture,
        }
    }
}

/// Loads the effective catalog for `config`.
///
/// # Errors
///
/// Returns an error if a configured catalog is unreadable or malformed.
pub fn load_catalog(config: &ImageVectorConfig) -> anyhow::Result<Arc<Catalog>> {
    Ok(overwrite::load(config)?)
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    match cli.command {
        Command::Resolve(args) => resolve::execute(args, &config),
        Command::Values(args) => values::execute(args, &config),
        Command::Merge(args) => merge::execute(args),
        Command::Validate(args) => validate::execute(&args),
        Command::List(args) => list::execute(&args, &config),
    }
}
