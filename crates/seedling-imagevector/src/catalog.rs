//! Image catalogs: ordered, immutable lists of image sources.
//!
//! A catalog is loaded once, from an embedded document, a file, or a merge
//! of two catalogs, and is read-only afterwards. Share it between threads
//! with [`Catalog::into_shared`].

use std::path::Path;
use std::sync::Arc;

use seedling_common::error::{Result, SeedlingError};
use serde::{Deserialize, Serialize};

use crate::source::ImageSource;

/// Document shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    images: Option<Vec<ImageSource>>,
}

#[derive(Debug, Serialize)]
struct CatalogDocumentRef<'a> {
    images: &'a [ImageSource],
}

/// An ordered list of image sources.
///
/// Order is significant: resolution breaks ties in favour of later entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sources: Vec<ImageSource>,
}

impl Catalog {
    /// Builds a catalog from entries, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `SeedlingError::Config` if any entry is malformed.
    pub fn new(sources: Vec<ImageSource>) -> Result<Self> {
        for source in &sources {
            source.validate()?;
        }
        Ok(Self { sources })
    }

    /// A catalog with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub(crate) const fn from_validated(sources: Vec<ImageSource>) -> Self {
        Self { sources }
    }

    /// Parses a catalog document.
    ///
    /// An empty document or one without an `images` key yields an empty
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a constraint does not
    /// parse, or an entry fails validation.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }
        let document: Option<CatalogDocument> = serde_yaml::from_str(text)?;
        let sources = document.and_then(|d| d.images).unwrap_or_default();
        Self::new(sources)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `SeedlingError::Io` if the file cannot be read, or any error
    /// of [`Catalog::from_yaml`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SeedlingError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_yaml(&text)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded image catalog"
        );
        Ok(catalog)
    }

    /// Serializes the catalog back into document form.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        let document = CatalogDocumentRef {
            images: &self.sources,
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterates over entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageSource> {
        self.sources.iter()
    }

    /// Wraps the catalog for sharing across threads.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageSource;
    type IntoIter = std::slice::Iter<'a, ImageSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}
