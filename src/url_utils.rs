//! URL Utility Functions
//!
//! Resolution of the relative references found in `href`, `src` and meta
//! `content` attributes against the page URL.

use url::Url;

/// Schemes that are already self-contained and must not be resolved.
const PASSTHROUGH_SCHEMES: &[&str] = &["data:", "blob:", "javascript:", "mailto:", "tel:"];

/// Convert a relative or absolute URL to absolute form.
///
/// Returns `None` for empty input or a reference that cannot be resolved.
///
/// # Example
///
/// ```rust
/// use page_clip::url_utils::create_absolute_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/blog/post").unwrap();
/// assert_eq!(
///     create_absolute_url("../img/a.png", &base).as_deref(),
///     Some("https://example.com/img/a.png")
/// );
/// ```
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return None;
    }

    let lower = url_str.to_ascii_lowercase();
    if PASSTHROUGH_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return Some(url_str.to_string());
    }

    base.join(url_str).ok().map(String::from)
}

/// Serialized origin of a URL (`https://example.com`), or `"null"` for
/// opaque origins.
#[must_use]
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}
