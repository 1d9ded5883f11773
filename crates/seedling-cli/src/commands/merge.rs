//! `seedctl merge`: Merge an override catalog over a base catalog.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use seedling_imagevector::Catalog;

/// Arguments for the `merge` command.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Base catalog file.
    pub base: PathBuf,

    /// Override catalog file.
    #[arg(value_name = "OVERRIDE")]
    pub overrides: PathBuf,

    /// Write the merged catalog to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `merge` command.
///
/// # Errors
///
/// Returns an error if either catalog cannot be loaded or the result
/// cannot be written.
pub fn execute(args: MergeArgs) -> anyhow::Result<()> {
    let base = Catalog::from_file(&args.base)?;
    let overrides = Catalog::from_file(&args.overrides)?;
    let merged = seedling_imagevector::merge(&base, &overrides);
    let document = merged.to_yaml()?;

    if let Some(ref out_path) = args.output {
        std::fs::write(out_path, &document)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        println!(
            "Merged {} + {} -> {}",
            args.base.display(),
            args.overrides.display(),
            out_path.display()
        );
        println!("Entries: {}", merged.len());
    } else {
        print!("{document}");
    }
    Ok(())
}
