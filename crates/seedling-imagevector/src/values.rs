//! Projection of resolved images into plain strings for templating.

use std::collections::BTreeMap;

use crate::image::Image;

/// Pull reference of `image`: `repo`, `repo:tag`, or `repo@sha256:...`.
#[must_use]
pub fn image_string(image: &Image) -> String {
    image.to_string()
}

/// Maps every image to its pull reference, keeping the keys.
#[must_use]
pub fn image_map_to_values<K: Ord + Clone>(images: &BTreeMap<K, Image>) -> BTreeMap<K, String> {
    images
        .iter()
        .map(|(key, image)| (key.clone(), image_string(image)))
        .collect()
}
