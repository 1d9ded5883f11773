//! The catalog embedded into the engine at build time.

use seedling_common::error::Result;

use crate::catalog::Catalog;

const DOCUMENT: &str = include_str!("../catalog/images.yaml");

/// Parses the built-in catalog.
///
/// # Errors
///
/// Returns an error if the embedded document is malformed.
pub fn catalog() -> Result<Catalog> {
    let catalog = Catalog::from_yaml(DOCUMENT)?;
    tracing::debug!(entries = catalog.len(), "parsed built-in image catalog");
    Ok(catalog)
}
