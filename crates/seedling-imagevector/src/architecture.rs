//! Architecture admission for catalog entries.

/// Whether an entry declaring `architectures` applies to a `requested` one.
///
/// An empty declaration applies everywhere. A non-empty one applies only to
/// an explicitly requested member, never to an unspecified request.
#[must_use]
pub fn accepts(architectures: &[String], requested: Option<&str>) -> bool {
    architectures.is_empty()
        || requested.is_some_and(|arch| architectures.iter().any(|a| a == arch))
}
