//! Slug generation.
//!
//! Slugs are URL-safe, normalized strings derived from a username at
//! creation time. Generation is deterministic: the same username always
//! yields the same slug.

/// Slug generator capability.
///
/// Abstracted behind a trait so the service layer can be tested with a
/// substitute and so the normalization strategy stays swappable.
pub trait SlugGenerator: Send + Sync {
    /// Derive an ASCII-safe slug from the given input
    fn slugify(&self, input: &str) -> String;
}

/// Default generator backed by the `slug` crate.
///
/// Lowercases, transliterates to ASCII, and collapses separator runs
/// into single hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
