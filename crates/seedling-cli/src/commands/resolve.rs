//! `seedctl resolve`: Resolve the image of one component.

use clap::Args;
use seedling_common::config::ImageVectorConfig;

use super::QueryArgs;

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Component name.
    pub name: String,

    /// Fill in this tag if the resolved image has none.
    #[arg(long)]
    pub default_tag: Option<String>,

    /// Query flags.
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Executes the `resolve` command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or nothing matches.
pub fn execute(args: ResolveArgs, config: &ImageVectorConfig) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    let options = args.query.into_options();
    tracing::info!(name = %args.name, query = %options, "resolving image");

    let mut image = catalog.find_image(&args.name, &options)?;
    if let Some(tag) = args.default_tag {
        image = image.with_optional_tag(tag);
    }
    println!("{}", seedling_imagevector::image_string(&image));
    Ok(())
}
