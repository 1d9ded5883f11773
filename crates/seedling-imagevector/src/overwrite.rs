//! Startup loading of the effective catalog and its external overrides.
//!
//! The built-in (or configured) catalog is merged once with an optional
//! override file. Components that keep their own catalogs can be given
//! overrides through a separate document keyed by component name.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use seedling_common::config::ImageVectorConfig;
use seedling_common::error::{Result, SeedlingError};
use serde::Deserialize;

use crate::builtin;
use crate::catalog::Catalog;
use crate::merge::merge;

/// Component-specific catalogs keyed by component name.
pub type ComponentCatalogs = BTreeMap<String, Catalog>;

#[derive(Debug, Deserialize)]
struct ComponentsDocument {
    #[serde(default)]
    components: Vec<ComponentOverwrite>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentOverwrite {
    name: String,
    #[serde(default)]
    image_vector_overwrite: String,
}

/// Merges the catalog file at `path` over `catalog`, if a path is given.
///
/// # Errors
///
/// Returns an error if the override file cannot be read or parsed.
pub fn with_override(catalog: Catalog, path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(catalog);
    };
    let overrides = Catalog::from_file(path)?;
    tracing::info!(
        path = %path.display(),
        entries = overrides.len(),
        "applying image vector override"
    );
    Ok(merge(&catalog, &overrides))
}

/// Builds the effective, shared catalog for `config`.
///
/// Uses the configured catalog file or, failing that, the built-in one,
/// then merges the configured override over it.
///
/// # Errors
///
/// Returns an error if any involved catalog is unreadable or malformed.
pub fn load(config: &ImageVectorConfig) -> Result<Arc<Catalog>> {
    let base = match &config.catalog_path {
        Some(path) => Catalog::from_file(path)?,
        None => builtin::catalog()?,
    };
    let catalog = with_override(base, config.override_path.as_deref())?;
    tracing::info!(entries = catalog.len(), "image vector ready");
    Ok(catalog.into_shared())
}

/// Parses a component overwrite document.
///
/// # Errors
///
/// Returns an error if the document is malformed, names a component twice,
/// or embeds an invalid catalog.
pub fn parse_component_catalogs(text: &str) -> Result<ComponentCatalogs> {
    if text.trim().is_empty() {
        return Ok(ComponentCatalogs::new());
    }
    let document: ComponentsDocument = serde_yaml::from_str(text)?;

    let mut catalogs = ComponentCatalogs::new();
    for component in document.components {
        if catalogs.contains_key(&component.name) {
            return Err(SeedlingError::Config {
                message: format!(
                    "image vector overwrite for component \"{}\" given more than once",
                    component.name
                ),
            });
        }
        let catalog = Catalog::from_yaml(&component.image_vector_overwrite).map_err(|e| {
            SeedlingError::Config {
                message: format!(
                    "image vector overwrite for component \"{}\" is invalid: {e}",
                    component.name
                ),
            }
        })?;
        let _ = catalogs.insert(component.name, catalog);
    }
    Ok(catalogs)
}

/// Reads a component overwrite document from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_component_catalogs(path: &Path) -> Result<ComponentCatalogs> {
    let text = std::fs::read_to_string(path).map_err(|e| SeedlingError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let catalogs = parse_component_catalogs(&text)?;
    tracing::info!(
        path = %path.display(),
        components = catalogs.len(),
        "loaded component image vector overwrites"
    );
    Ok(catalogs)
}

/// Loads the component overwrites configured in `config`, if any.
///
/// # Errors
///
/// Returns an error if the configured document is unreadable or malformed.
pub fn load_component_catalogs(config: &ImageVectorConfig) -> Result<ComponentCatalogs> {
    config
        .component_override_path
        .as_deref()
        .map_or_else(|| Ok(ComponentCatalogs::new()), read_component_catalogs)
}
