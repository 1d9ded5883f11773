//! Resolved image references.

use std::fmt;

use seedling_common::constants::DIGEST_PREFIX;

/// A concrete image reference produced by the resolver.
///
/// Fields are read-only once the value exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    name: String,
    repository: String,
    tag: Option<String>,
}

impl Image {
    /// Creates an image reference.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        repository: impl Into<String>,
        tag: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            tag,
        }
    }

    /// Logical component name the image was resolved for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry and path of the image.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Tag or digest, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether the tag is a content digest (`sha256:...`).
    #[must_use]
    pub fn is_digest(&self) -> bool {
        self.tag.as_deref().is_some_and(|t| t.starts_with(DIGEST_PREFIX))
    }

    /// Returns the image with `tag` filled in if it has none yet.
    ///
    /// Components built from this repository use this to pin un-tagged
    /// catalog entries to their own release.
    #[must_use]
    pub fn with_optional_tag(self, tag: impl Into<String>) -> Self {
        Self {
            tag: self.tag.or_else(|| Some(tag.into())),
            ..self
        }
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag.as_deref() {
            None => write!(f, "{}", self.repository),
            Some(tag) if self.is_digest() => write!(f, "{}@{tag}", self.repository),
            Some(tag) => write!(f, "{}:{tag}", self.repository),
        }
    }
}
