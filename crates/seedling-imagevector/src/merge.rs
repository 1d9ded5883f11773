//! Override merging of two catalogs.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::source::ImageSource;
use crate::version::VersionConstraint;

/// Identity of an entry for merging: name and runtime constraint.
type MergeKey<'a> = (&'a str, Option<&'a VersionConstraint>);

fn key(source: &ImageSource) -> MergeKey<'_> {
    (source.name.as_str(), source.runtime_version.as_ref())
}

/// Merges `overrides` over `base`.
///
/// An override entry matching a base entry on name and runtime constraint
/// replaces it in place if it carries a tag and is dropped otherwise, so a
/// tag-less override never erases a pinned tag. Unmatched override entries
/// are appended in their original order.
#[must_use]
pub fn merge(base: &Catalog, overrides: &Catalog) -> Catalog {
    let mut result: Vec<&ImageSource> = base.iter().collect();
    let mut index: HashMap<MergeKey<'_>, usize> = HashMap::with_capacity(result.len());
    for (position, source) in base.iter().enumerate() {
        let _ = index.entry(key(source)).or_insert(position);
    }

    let (mut replaced, mut kept, mut appended) = (0_usize, 0_usize, 0_usize);
    for source in overrides {
        match index.get(&key(source)).copied() {
            Some(position) if source.tag.is_some() => {
                tracing::debug!(name = %source.name, position, "override replaces image source");
                result[position] = source;
                replaced += 1;
            }
            Some(position) => {
                tracing::debug!(
                    name = %source.name,
                    position,
                    "override without tag ignored, keeping base image source"
                );
                kept += 1;
            }
            None => {
                let _ = index.insert(key(source), result.len());
                result.push(source);
                appended += 1;
            }
        }
    }

    tracing::info!(
        base = base.len(),
        overrides = overrides.len(),
        replaced,
        kept,
        appended,
        "merged image catalogs"
    );
    Catalog::from_validated(result.into_iter().cloned().collect())
}
