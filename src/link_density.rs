//! Link Density Testing
//!
//! Navigation blocks and link farms are mostly anchor text. Measuring how much
//! of a node's text sits inside links keeps them from being read as prose.

use dom_query::Selection;

use crate::dom;

/// Ratio above which a node counts as link-dense.
pub const HIGH_LINK_DENSITY: f64 = 0.5;

/// Total link text length divided by the node's text length.
///
/// Lengths are counted in characters. A node without text has density 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calc_link_density(element: &Selection) -> f64 {
    let text_length = dom::text_content(element).chars().count();
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = element
        .select("a")
        .nodes()
        .iter()
        .map(|link| link.text().chars().count())
        .sum();

    link_length as f64 / text_length as f64
}

/// Whether more than half of the node's text is link text.
#[must_use]
pub fn is_high_link_density(element: &Selection) -> bool {
    calc_link_density(element) > HIGH_LINK_DENSITY
}
