//! Content scoring heuristics.
//!
//! Distinguishes prose paragraphs from boilerplate without any language
//! specific parsing: longer, punctuation-rich text scores higher than nav
//! labels and captions.

use dom_query::Selection;

use crate::dom;
use crate::link_density::is_high_link_density;
use crate::patterns::UNLIKELY_CANDIDATES;

/// Texts shorter than this (in characters) never score.
pub const MIN_CONTENT_LENGTH: usize = 25;

/// Default baseline for [`is_sufficiently_contenty`].
pub const DEFAULT_BASELINE: usize = 3;

/// Score how much `text` looks like a content paragraph.
///
/// Returns 0 below [`MIN_CONTENT_LENGTH`] characters. Otherwise
/// `1 + comma-delimited parts + min(len / 100, 3)`.
///
/// # Examples
///
/// ```
/// use page_clip::scoring::score_contentyness;
///
/// assert_eq!(score_contentyness(""), 0);
/// assert_eq!(score_contentyness(&"a".repeat(24)), 0);
/// ```
#[must_use]
pub fn score_contentyness(text: &str) -> usize {
    let length = text.chars().count();
    if length < MIN_CONTENT_LENGTH {
        return 0;
    }

    let parts = text.split(',').count();
    1 + parts + (length / 100).min(3)
}

/// Trimmed text of a node, as scored.
fn text_of(sel: &Selection) -> String {
    dom::text_content(sel).trim().to_string()
}

/// Whether the node's text scores strictly above `baseline`.
#[must_use]
pub fn is_sufficiently_contenty(sel: &Selection, baseline: usize) -> bool {
    score_contentyness(&text_of(sel)) > baseline
}

/// Whether the node's class marks it as boilerplate.
#[must_use]
pub fn is_unlikely_candidate(sel: &Selection) -> bool {
    dom::class_name(sel).is_some_and(|class| UNLIKELY_CANDIDATES.is_match(&class))
}

/// Whether a text block may serve as a description.
///
/// All of: not an unlikely candidate, longer than [`MIN_CONTENT_LENGTH`]
/// characters, link density at most 0.5, and contenty above `baseline`.
#[must_use]
pub fn is_description_candidate(sel: &Selection, baseline: usize) -> bool {
    if is_unlikely_candidate(sel) {
        return false;
    }

    let text = text_of(sel);
    text.chars().count() > MIN_CONTENT_LENGTH
        && !is_high_link_density(sel)
        && score_contentyness(&text) > baseline
}
