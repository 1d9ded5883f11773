//! `seedctl values`: Resolve components into template values.

use clap::Args;
use seedling_common::config::ImageVectorConfig;
use seedling_imagevector::image_map_to_values;

use super::QueryArgs;

/// Arguments for the `values` command.
#[derive(Args, Debug)]
pub struct ValuesArgs {
    /// Component names; all built-in names when omitted.
    pub names: Vec<String>,

    /// Query flags.
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Executes the `values` command.
///
/// Prints a JSON object mapping every name to its image reference.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or any name fails to
/// resolve.
pub fn execute(args: ValuesArgs, config: &ImageVectorConfig) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    let names = if args.names.is_empty() {
        seedling_imagevector::names::ALL
            .iter()
            .map(|name| (*name).to_string())
            .collect()
    } else {
        args.names
    };
    let options = args.query.into_options();

    let images = catalog.find_images_with(&names, &options)?;
    let values = image_map_to_values(&images);
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
