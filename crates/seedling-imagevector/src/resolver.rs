//! Image resolution: filtering and ranking catalog entries for a query.
//!
//! Candidates are admitted by name, architecture, and both version
//! constraints, then ranked by `(runtime, target)` specificity. Among equally
//! ranked candidates the one occurring last in the catalog wins.

use std::collections::BTreeMap;
use std::fmt;

use semver::Version;

use crate::architecture;
use crate::catalog::Catalog;
use crate::error::ImageNotFound;
use crate::image::Image;
use crate::source::ImageSource;
use crate::version::{Specificity, evaluate};

/// Query parameters for a lookup. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Version of the system performing the deployment.
    pub runtime_version: Option<Version>,
    /// Version of the workload being deployed into.
    pub target_version: Option<Version>,
    /// CPU architecture of the node the image will run on.
    pub architecture: Option<String>,
}

impl FindOptions {
    /// Sets the runtime version.
    #[must_use]
    pub fn runtime_version(mut self, version: Version) -> Self {
        self.runtime_version = Some(version);
        self
    }

    /// Sets the target version.
    #[must_use]
    pub fn target_version(mut self, version: Version) -> Self {
        self.target_version = Some(version);
        self
    }

    /// Sets the architecture.
    #[must_use]
    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }
}

impl fmt::Display for FindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(3);
        if let Some(v) = &self.runtime_version {
            fields.push(format!("runtime version {v}"));
        }
        if let Some(v) = &self.target_version {
            fields.push(format!("target version {v}"));
        }
        if let Some(arch) = &self.architecture {
            fields.push(format!("architecture {arch}"));
        }
        if fields.is_empty() {
            f.write_str("no query options")
        } else {
            f.write_str(&fields.join(", "))
        }
    }
}

/// Ranking key of an admitted candidate, compared lexicographically.
type Rank = (Specificity, Specificity);

/// Admits `source` for `options` and returns its rank.
fn rank(source: &ImageSource, options: &FindOptions) -> Option<Rank> {
    if !architecture::accepts(&source.architectures, options.architecture.as_deref()) {
        return None;
    }
    let runtime = evaluate(
        source.runtime_version.as_ref(),
        options.runtime_version.as_ref(),
    )?;
    let target = evaluate(
        source.target_version.as_ref(),
        options.target_version.as_ref(),
    )?;
    Some((runtime, target))
}

impl Catalog {
    /// Resolves the single best image for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageNotFound`] if no entry is admitted by the query.
    pub fn find_image(&self, name: &str, options: &FindOptions) -> Result<Image, ImageNotFound> {
        let mut best: Option<(Rank, &ImageSource)> = None;
        for source in self.iter().filter(|s| s.name == name) {
            let Some(candidate) = rank(source, options) else {
                continue;
            };
            // `>=` lets a later entry of equal rank replace an earlier one.
            if best.as_ref().is_none_or(|(current, _)| candidate >= *current) {
                best = Some((candidate, source));
            }
        }

        let Some(((runtime, target), source)) = best else {
            tracing::debug!(name, query = %options, "no image source matched");
            return Err(ImageNotFound {
                name: name.to_string(),
                query: options.clone(),
            });
        };

        let image = source.to_image(options.target_version.as_ref());
        tracing::debug!(
            name,
            query = %options,
            runtime = %runtime,
            target = %target,
            image = %image,
            "resolved image"
        );
        Ok(image)
    }

    /// Resolves every name without query options.
    ///
    /// # Errors
    ///
    /// Returns the [`ImageNotFound`] of the first name that does not resolve.
    pub fn find_images<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, Image>, ImageNotFound> {
        self.find_images_with(names, &FindOptions::default())
    }

    /// Resolves every name with the same query options.
    ///
    /// # Errors
    ///
    /// Returns the [`ImageNotFound`] of the first name that does not resolve.
    pub fn find_images_with<S: AsRef<str>>(
        &self,
        names: &[S],
        options: &FindOptions,
    ) -> Result<BTreeMap<String, Image>, ImageNotFound> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find_image(name, options)
                    .map(|image| (name.to_string(), image))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse_version;

    const RUNTIME_RANGE: &str = ">= 1.6, < 1.8";

    fn version(v: &str) -> Version {
        parse_version(v).expect("version should parse")
    }

    fn catalog(sources: Vec<ImageSource>) -> Catalog {
        Catalog::new(sources).expect("catalog should be valid")
    }

    fn tagged(name: &str, tag: &str) -> ImageSource {
        ImageSource::new(name, format!("registry.example/{name}")).with_tag(tag)
    }

    fn runtime(source: ImageSource, expr: &str) -> ImageSource {
        source.with_runtime_version(expr).expect("runtime constraint")
    }

    fn target(source: ImageSource, expr: &str) -> ImageSource {
        source.with_target_version(expr).expect("target constraint")
    }

    fn resolved_tag(catalog: &Catalog, name: &str, options: &FindOptions) -> Option<String> {
        catalog
            .find_image(name, options)
            .ok()
            .and_then(|image| image.tag().map(str::to_string))
    }

    // ── Basic admission ──────────────────────────────────────────────

    #[test]
    fn empty_catalog_finds_nothing() {
        let err = Catalog::empty()
            .find_image("etcd", &FindOptions::default())
            .expect_err("should not resolve");
        assert_eq!(err.name, "etcd");
    }

    #[test]
    fn runtime_range_matches_supplied_version() {
        let c = catalog(vec![
            runtime(ImageSource::new("x", "repo").with_tag("t1"), ">=1.6,<1.8"),
        ]);
        let image = c
            .find_image("x", &FindOptions::default().runtime_version(version("1.6.4")))
            .expect("should resolve");
        assert_eq!(image, Image::new("x", "repo", Some("t1".into())));
    }

    #[test]
    fn suffixed_runtime_version_matches_on_release() {
        let c = catalog(vec![runtime(tagged("x", "t1"), RUNTIME_RANGE)]);
        let options = FindOptions::default().runtime_version(version("1.6.4-foo.5"));
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("t1"));
    }

    #[test]
    fn untagged_entry_takes_tag_from_target_version() {
        let c = catalog(vec![ImageSource::new("x", "repo")]);
        let image = c
            .find_image("x", &FindOptions::default().target_version(version("1.8.0")))
            .expect("should resolve");
        assert_eq!(image, Image::new("x", "repo", Some("v1.8.0".into())));
    }

    #[test]
    fn declared_tag_ignores_target_version() {
        let c = catalog(vec![runtime(tagged("x", "t1"), RUNTIME_RANGE)]);
        let options = FindOptions::default()
            .runtime_version(version("1.6.4"))
            .target_version(version("1.8.0"));
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("t1"));
    }

    #[test]
    fn name_mismatch_is_not_found() {
        let c = catalog(vec![tagged("image1", "t1")]);
        assert!(c.find_image("image2", &FindOptions::default()).is_err());
    }

    #[test]
    fn runtime_version_out_of_range_is_not_found() {
        let c = catalog(vec![runtime(tagged("x", "t1"), RUNTIME_RANGE)]);
        let options = FindOptions::default().runtime_version(version("1.8.0"));
        let err = c.find_image("x", &options).expect_err("should not resolve");
        assert_eq!(err.query, options);
        assert!(err.to_string().contains("runtime version 1.8.0"));
    }

    #[test]
    fn concrete_constraint_excludes_entry_without_query_version() {
        let c = catalog(vec![runtime(tagged("x", "t1"), RUNTIME_RANGE)]);
        assert!(c.find_image("x", &FindOptions::default()).is_err());

        let open = catalog(vec![runtime(tagged("x", "t1"), "*")]);
        assert_eq!(
            resolved_tag(&open, "x", &FindOptions::default()).as_deref(),
            Some("t1")
        );
    }

    #[test]
    fn unconstrained_entry_matches_any_runtime_version() {
        let c = catalog(vec![tagged("x", "t1")]);
        let options = FindOptions::default().runtime_version(version("1.8.0"));
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("t1"));
    }

    // ── Architecture ─────────────────────────────────────────────────

    #[test]
    fn architecture_entry_requires_explicit_request() {
        let c = catalog(vec![runtime(tagged("x", "t1"), RUNTIME_RANGE).with_architectures(["arm64"])]);
        let v164 = FindOptions::default().runtime_version(version("1.6.4"));

        assert!(c.find_image("x", &v164).is_err());
        assert!(c.find_image("x", &v164.clone().architecture("amd64")).is_err());
        assert_eq!(
            resolved_tag(&c, "x", &v164.architecture("arm64")).as_deref(),
            Some("t1")
        );
    }

    #[test]
    fn architecture_never_outranks_catalog_order() {
        let generic = tagged("x", "generic");
        let multi_arch = tagged("x", "multi").with_architectures(["arm64", "amd64"]);
        let ranged = runtime(tagged("x", "ranged"), RUNTIME_RANGE);
        let options = FindOptions::default()
            .runtime_version(version("1.8.0"))
            .architecture("arm64");

        let c = catalog(vec![multi_arch.clone(), generic.clone(), ranged.clone()]);
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("generic"));

        let c = catalog(vec![generic, ranged, multi_arch]);
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("multi"));
    }

    // ── Ranking ──────────────────────────────────────────────────────

    #[test]
    fn range_beats_unconstrained_when_in_range() {
        let c = catalog(vec![
            tagged("x", "plain"),
            runtime(tagged("x", "ranged"), RUNTIME_RANGE),
            runtime(tagged("x", "arm"), RUNTIME_RANGE).with_architectures(["arm64"]),
        ]);

        let in_range = FindOptions::default().runtime_version(version("1.6.4"));
        assert_eq!(resolved_tag(&c, "x", &in_range).as_deref(), Some("ranged"));
        assert_eq!(
            resolved_tag(&c, "x", &in_range.architecture("arm64")).as_deref(),
            Some("arm")
        );

        let out_of_range = FindOptions::default().runtime_version(version("1.8.0"));
        assert_eq!(resolved_tag(&c, "x", &out_of_range).as_deref(), Some("plain"));
    }

    #[test]
    fn exact_literal_beats_wildcard_regardless_of_order() {
        let query = FindOptions::default().target_version(version("1.14.2"));
        let wildcard = target(tagged("x", "wildcard"), "1.14.x");
        let exact = target(tagged("x", "exact"), "1.14.2");

        let c = catalog(vec![wildcard.clone(), exact.clone()]);
        assert_eq!(resolved_tag(&c, "x", &query).as_deref(), Some("exact"));

        let c = catalog(vec![exact, wildcard]);
        assert_eq!(resolved_tag(&c, "x", &query).as_deref(), Some("exact"));
    }

    #[test]
    fn exact_target_beats_unconstrained_target() {
        let c = catalog(vec![
            target(tagged("x", "t1"), RUNTIME_RANGE),
            target(tagged("x", "t2"), "1.13"),
            tagged("x", "t3"),
        ]);

        let v113 = FindOptions::default().target_version(version("1.13"));
        assert_eq!(resolved_tag(&c, "x", &v113).as_deref(), Some("t2"));

        let v1142 = FindOptions::default().target_version(version("1.14.2"));
        assert_eq!(resolved_tag(&c, "x", &v1142).as_deref(), Some("t3"));
    }

    #[test]
    fn runtime_specificity_is_compared_before_target() {
        let c = catalog(vec![
            target(tagged("x", "target-exact"), "1.13"),
            target(runtime(tagged("x", "both"), RUNTIME_RANGE), "1.13"),
            target(tagged("x", "target-range"), "1.x"),
        ]);
        let options = FindOptions::default()
            .runtime_version(version("1.6.4"))
            .target_version(version("1.13"));
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("both"));
    }

    #[test]
    fn both_axes_must_match() {
        let c = catalog(vec![
            target(tagged("x", "t1"), RUNTIME_RANGE),
            target(runtime(tagged("x", "t4"), RUNTIME_RANGE), "1.13"),
        ]);
        let options = FindOptions::default()
            .runtime_version(version("1.8.0"))
            .target_version(version("1.13"));
        assert!(c.find_image("x", &options).is_err());

        let options = FindOptions::default()
            .runtime_version(version("1.6.4"))
            .target_version(version("1.14.2"));
        assert!(c.find_image("x", &options).is_err());
    }

    #[test]
    fn last_entry_wins_on_equal_rank() {
        let c = catalog(vec![
            target(tagged("x", "t2"), "1.13"),
            target(tagged("x", "t5"), "= 1.17.0"),
            target(tagged("x", "t5-arm"), "= 1.17.0").with_architectures(["arm64"]),
        ]);
        let options = FindOptions::default().target_version(version("1.17.0"));
        assert_eq!(resolved_tag(&c, "x", &options).as_deref(), Some("t5"));
        assert_eq!(
            resolved_tag(&c, "x", &options.architecture("arm64")).as_deref(),
            Some("t5-arm")
        );
    }

    // ── Batch lookups ────────────────────────────────────────────────

    #[test]
    fn find_images_collects_every_name() {
        let c = catalog(vec![tagged("image1", "t1"), tagged("image2", "t2")]);
        let images = c.find_images(&["image1", "image2"]).expect("should resolve");
        assert_eq!(images.len(), 2);
        assert_eq!(images["image1"].tag(), Some("t1"));
        assert_eq!(images["image2"].tag(), Some("t2"));
    }

    #[test]
    fn find_images_reports_first_missing_name() {
        let c = catalog(vec![tagged("image1", "t1"), tagged("image2", "t2")]);
        let err = c
            .find_images(&["image1", "image3", "image4"])
            .expect_err("should fail");
        assert_eq!(err.name, "image3");
    }

    #[test]
    fn find_images_with_applies_shared_query() {
        let c = catalog(vec![
            runtime(tagged("image1", "t1"), RUNTIME_RANGE),
            ImageSource::new("image2", "repo2"),
        ]);
        let options = FindOptions::default()
            .runtime_version(version("1.7.0"))
            .target_version(version("1.27.3"));
        let images = c
            .find_images_with(&["image1".to_string(), "image2".to_string()], &options)
            .expect("should resolve");
        assert_eq!(images["image1"].to_string(), "registry.example/image1:t1");
        assert_eq!(images["image2"].to_string(), "repo2:v1.27.3");
    }

    #[test]
    fn options_display_lists_set_fields() {
        assert_eq!(FindOptions::default().to_string(), "no query options");
        let options = FindOptions::default()
            .target_version(version("1.28"))
            .architecture("amd64");
        assert_eq!(
            options.to_string(),
            "target version 1.28.0, architecture amd64"
        );
    }
}
