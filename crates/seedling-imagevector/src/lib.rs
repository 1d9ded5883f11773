//! # seedling-imagevector
//!
//! Image vector resolution for seed and shoot components.
//!
//! Decides which concrete image reference each component deploys, given:
//! - **Catalog**: ordered image sources with version and architecture rules.
//! - **Query**: runtime version, target version, and architecture.
//! - **Overrides**: an external catalog merged over the built-in one.
//!
//! Catalogs are parsed and validated once and are read-only afterwards;
//! resolution is pure and safe to call from any number of threads.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod architecture;
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod image;
pub mod merge;
pub mod names;
pub mod overwrite;
pub mod resolver;
pub mod source;
pub mod values;
pub mod version;

pub use catalog::Catalog;
pub use error::ImageNotFound;
pub use image::Image;
pub use merge::merge;
pub use resolver::FindOptions;
pub use source::ImageSource;
pub use values::{image_map_to_values, image_string};
pub use version::{Specificity, VersionConstraint, parse_version};
