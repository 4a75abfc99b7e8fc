//! Conversions between tag names and their URL slugs.

/// `"Embedded Systems"` → `"embedded-systems"`.
pub fn tag_to_slug(tag: &str) -> String {
    tag.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// `"embedded-systems"` → `"embedded systems"`. Case is not restored.
pub fn slug_to_tag(slug: &str) -> String {
    slug.replace('-', " ")
}
