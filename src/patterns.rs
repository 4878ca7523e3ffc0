//! Compiled regex patterns for clip extraction.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection Patterns
// =============================================================================

/// Class names marking blocks that are unlikely to hold article prose.
///
/// Matched case-insensitively as a substring anywhere in the `class`
/// attribute, so `article-footer` and `commentary` both match.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)date|social|community|remark|discuss|disqus|e-?mail|rss|print|extra|share|login|sign|reply|combx|comment|com-|contact|header|menu|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget|ad-break|agegate|pagination|pager|popup|tweet|twitter",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

// =============================================================================
// Title Cleaning Patterns
// =============================================================================

/// A title separator with whitespace on both sides: `" | "`, `" - "`, `" : "`.
pub static SPACED_TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[|\-:]\s+").expect("SPACED_TITLE_SEPARATOR regex")
});

/// A bare title separator: `|`, `-` or `:`.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[|\-:]").expect("TITLE_SEPARATOR regex"));

// =============================================================================
// Charset Patterns
// =============================================================================

/// A charset declared in a `<meta>` tag, either `<meta charset=...>` or the
/// `charset=` parameter inside an `http-equiv` content value.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([\w.:\-]+)"#).expect("META_CHARSET regex")
});

/// The `charset` parameter of a `Content-Type` value.
pub static CHARSET_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([\w.:\-]+)"#).expect("CHARSET_PARAM regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlikely_candidates_match_boilerplate_classes() {
        assert!(UNLIKELY_CANDIDATES.is_match("site-footer"));
        assert!(UNLIKELY_CANDIDATES.is_match("Sidebar"));
        assert!(UNLIKELY_CANDIDATES.is_match("share-buttons"));
        assert!(UNLIKELY_CANDIDATES.is_match("newsletter-email"));
        assert!(UNLIKELY_CANDIDATES.is_match("ad-break"));
        assert!(!UNLIKELY_CANDIDATES.is_match("article-body"));
        assert!(!UNLIKELY_CANDIDATES.is_match("story"));
    }

    #[test]
    fn spaced_separator_requires_whitespace() {
        assert!(SPACED_TITLE_SEPARATOR.is_match("Post | Blog"));
        assert!(SPACED_TITLE_SEPARATOR.is_match("Post - Blog"));
        assert!(!SPACED_TITLE_SEPARATOR.is_match("Well-known Post"));
        assert!(TITLE_SEPARATOR.is_match("Well-known Post"));
    }
}
