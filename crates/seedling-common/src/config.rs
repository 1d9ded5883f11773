//! Configuration model for image vector loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{COMPONENT_OVERRIDE_ENV, OVERRIDE_ENV};

/// Where the engine reads its catalogs from at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVectorConfig {
    /// Catalog file used instead of the embedded built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Catalog file merged over the base catalog with override priority.
    pub override_path: Option<PathBuf>,
    /// Document holding component-specific catalogs.
    pub component_override_path: Option<PathBuf>,
}

impl ImageVectorConfig {
    /// Builds the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };
        Self {
            catalog_path: None,
            override_path: path(OVERRIDE_ENV),
            component_override_path: path(COMPONENT_OVERRIDE_ENV),
        }
    }
}
