//! Resolution errors.

use seedling_common::error::SeedlingError;
use thiserror::Error;

use crate::resolver::FindOptions;

/// No catalog entry satisfied a lookup.
///
/// Carries the requested name and the full query so callers can log or
/// retry without rebuilding context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not find image \"{name}\" ({query})")]
pub struct ImageNotFound {
    /// The requested component name.
    pub name: String,
    /// The query that found no match.
    pub query: FindOptions,
}

impl From<ImageNotFound> for SeedlingError {
    fn from(err: ImageNotFound) -> Self {
        Self::NotFound {
            kind: "image",
            id: format!("{} ({})", err.name, err.query),
        }
    }
}
