//! `seedctl list`: List catalog entries.

use anyhow::Context;
use clap::Args;
use seedling_common::config::ImageVectorConfig;
use seedling_imagevector::{Catalog, overwrite};

use crate::output;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show entries with this name.
    #[arg(long)]
    pub name: Option<String>,

    /// List the catalog of this component from the component overwrites.
    #[arg(long)]
    pub component: Option<String>,
}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the component has
/// no overwrite.
pub fn execute(args: &ListArgs, config: &ImageVectorConfig) -> anyhow::Result<()> {
    let table = if let Some(component) = &args.component {
        let catalogs = overwrite::load_component_catalogs(config)?;
        let catalog = catalogs
            .get(component)
            .with_context(|| format!("no image vector overwrite for component {component}"))?;
        render(catalog, args.name.as_deref())
    } else {
        let catalog = super::load_catalog(config)?;
        render(&catalog, args.name.as_deref())
    };
    print!("{table}");
    Ok(())
}

fn render(catalog: &Catalog, name: Option<&str>) -> String {
    let sources: Vec<_> = catalog
        .iter()
        .filter(|s| name.is_none_or(|n| s.name == n))
        .collect();
    output::sources_table(&sources)
}
