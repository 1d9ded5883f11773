//! Image source entries of a catalog.
//!
//! An entry names a component, where its image lives, and the runtime
//! versions, target versions, and architectures it applies to.

use seedling_common::constants::SYNTHESIZED_TAG_PREFIX;
use seedling_common::error::{Result, SeedlingError};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::image::Image;
use crate::version::VersionConstraint;

/// One catalog entry describing a candidate image and when it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Logical component name; several entries may share it.
    pub name: String,
    /// Registry and path of the image.
    pub repository: String,
    /// Fixed tag or digest; synthesized from the target version when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Where the image is built from. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_repository: Option<String>,
    /// Runtime (seed) versions the entry applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<VersionConstraint>,
    /// Target (shoot) versions the entry applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_version: Option<VersionConstraint>,
    /// Architectures the entry applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub architectures: Vec<String>,
}

impl ImageSource {
    /// Creates an unconstrained, un-tagged entry.
    #[must_use]
    pub fn new(name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            tag: None,
            source_repository: None,
            runtime_version: None,
            target_version: None,
            architectures: Vec::new(),
        }
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Constrains the runtime version.
    ///
    /// # Errors
    ///
    /// Returns an error if `expression` is not a valid constraint.
    pub fn with_runtime_version(mut self, expression: &str) -> Result<Self> {
        self.runtime_version = Some(VersionConstraint::parse(expression)?);
        Ok(self)
    }

    /// Constrains the target version.
    ///
    /// # Errors
    ///
    /// Returns an error if `expression` is not a valid constraint.
    pub fn with_target_version(mut self, expression: &str) -> Result<Self> {
        self.target_version = Some(VersionConstraint::parse(expression)?);
        Ok(self)
    }

    /// Restricts the entry to the given architectures.
    #[must_use]
    pub fn with_architectures<I, S>(mut self, architectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.architectures = architectures.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the invariants that parsing alone does not enforce.
    ///
    /// # Errors
    ///
    /// Returns `SeedlingError::Config` for an empty name, repository, or
    /// architecture string.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SeedlingError::Config {
                message: format!("image source for repository \"{}\" has no name", self.repository),
            });
        }
        if self.repository.trim().is_empty() {
            return Err(SeedlingError::Config {
                message: format!("image source \"{}\" has no repository", self.name),
            });
        }
        if self.architectures.iter().any(|a| a.trim().is_empty()) {
            return Err(SeedlingError::Config {
                message: format!("image source \"{}\" lists an empty architecture", self.name),
            });
        }
        Ok(())
    }

    /// Produces the image this entry resolves to for `target_version`.
    ///
    /// A declared tag is used verbatim. Otherwise the tag is `v<target>` if
    /// a target version is given, and absent if not.
    #[must_use]
    pub fn to_image(&self, target_version: Option<&Version>) -> Image {
        let tag = self.tag.clone().or_else(|| {
            target_version.map(|version| format!("{SYNTHESIZED_TAG_PREFIX}{version}"))
        });
        Image::new(self.name.clone(), self.repository.clone(), tag)
    }
}
