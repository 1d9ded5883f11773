//! `seedctl validate`: Check that a catalog file loads.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use seedling_imagevector::Catalog;

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file to check.
    pub file: PathBuf,
}

/// Executes the `validate` command.
///
/// # Errors
///
/// Returns an error if the catalog is unreadable or malformed.
pub fn execute(args: &ValidateArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_file(&args.file)?;
    let components: BTreeSet<_> = catalog.iter().map(|s| s.name.as_str()).collect();
    println!(
        "{}: valid ({} entries, {} components)",
        args.file.display(),
        catalog.len(),
        components.len()
    );
    Ok(())
}
