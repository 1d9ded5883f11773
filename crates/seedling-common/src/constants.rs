//! System-wide constants.

/// Environment variable naming a catalog file merged over the built-in one.
pub const OVERRIDE_ENV: &str = "IMAGEVECTOR_OVERWRITE";

/// Environment variable naming a document of per-component catalogs.
pub const COMPONENT_OVERRIDE_ENV: &str = "IMAGEVECTOR_OVERWRITE_COMPONENTS";

/// Tag prefix marking a content digest rather than a mutable tag.
pub const DIGEST_PREFIX: &str = "sha256:";

/// Prefix prepended to a target version when a tag is synthesized from it.
pub const SYNTHESIZED_TAG_PREFIX: &str = "v";
