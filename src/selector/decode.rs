//! Decoders for [`super::query`].
//!
//! Each decoder is a pure function of its node. A node of the wrong shape, or
//! one with nothing usable in it, decodes to `None`.

use dom_query::{NodeRef, Selection};

use crate::dom::{HtmlElement, ImageTag, LinkTag};
use crate::seq::non_blank;

/// Trimmed text content of an element.
#[must_use]
pub fn text(node: NodeRef) -> Option<String> {
    let element = HtmlElement::classify(node)?;
    non_blank(element.selection().text().to_string())
}

/// Trimmed `content` of a `<meta>` element.
#[must_use]
pub fn meta_content(node: NodeRef) -> Option<String> {
    HtmlElement::classify(node)?
        .as_meta()?
        .content()
        .and_then(non_blank)
}

/// The element itself, for decoders that need to inspect it further.
#[must_use]
pub fn element(node: NodeRef<'_>) -> Option<Selection<'_>> {
    HtmlElement::classify(node).map(|e| e.selection().clone())
}

/// An `<img>` element.
#[must_use]
pub fn image(node: NodeRef<'_>) -> Option<ImageTag<'_>> {
    HtmlElement::classify(node)?.as_image()
}

/// A `<link>` element.
#[must_use]
pub fn link(node: NodeRef<'_>) -> Option<LinkTag<'_>> {
    HtmlElement::classify(node)?.as_link()
}
