//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate plus the tagged element model the
//! resolvers decode into. Every downcast here returns an `Option`; a node of
//! the wrong shape is "no candidate", never a failure.

use serde::{Deserialize, Serialize};

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    get_attribute(sel, "class")
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tagged element model ===

/// An element node, narrowed to the shapes the resolvers care about.
#[derive(Clone)]
pub enum HtmlElement<'a> {
    /// `<meta>`
    Meta(MetaTag<'a>),
    /// `<link>`
    Link(LinkTag<'a>),
    /// `<img>`
    Image(ImageTag<'a>),
    /// Any other element.
    Other(Selection<'a>),
}

impl<'a> HtmlElement<'a> {
    /// Classify a node. Returns `None` for text, comment and document nodes.
    #[must_use]
    pub fn classify(node: NodeRef<'a>) -> Option<Self> {
        if !node.is_element() {
            return None;
        }
        let tag = node.node_name()?.to_ascii_lowercase();
        let sel = Selection::from(node);

        Some(match tag.as_str() {
            "meta" => Self::Meta(MetaTag(sel)),
            "link" => Self::Link(LinkTag(sel)),
            "img" => Self::Image(ImageTag(sel)),
            _ => Self::Other(sel),
        })
    }

    /// The underlying selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<'a> {
        match self {
            Self::Meta(MetaTag(sel))
            | Self::Link(LinkTag(sel))
            | Self::Image(ImageTag(sel))
            | Self::Other(sel) => sel,
        }
    }

    /// Narrow to a `<meta>` element.
    #[must_use]
    pub fn as_meta(self) -> Option<MetaTag<'a>> {
        match self {
            Self::Meta(meta) => Some(meta),
            _ => None,
        }
    }

    /// Narrow to a `<link>` element.
    #[must_use]
    pub fn as_link(self) -> Option<LinkTag<'a>> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Narrow to an `<img>` element.
    #[must_use]
    pub fn as_image(self) -> Option<ImageTag<'a>> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// A `<meta>` element.
#[derive(Clone)]
pub struct MetaTag<'a>(Selection<'a>);

impl MetaTag<'_> {
    /// The `content` attribute.
    #[must_use]
    pub fn content(&self) -> Option<String> {
        get_attribute(&self.0, "content")
    }
}

/// A `<link>` element.
#[derive(Clone)]
pub struct LinkTag<'a>(Selection<'a>);

impl<'a> LinkTag<'a> {
    /// The `rel` attribute, lowercased with whitespace collapsed.
    #[must_use]
    pub fn rel(&self) -> String {
        get_attribute(&self.0, "rel")
            .map(|rel| rel.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// The raw `href` attribute.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        get_attribute(&self.0, "href")
    }

    /// The `type` attribute.
    #[must_use]
    pub fn mime_type(&self) -> String {
        get_attribute(&self.0, "type").unwrap_or_default()
    }

    /// The raw `sizes` attribute.
    #[must_use]
    pub fn sizes(&self) -> String {
        get_attribute(&self.0, "sizes").unwrap_or_default()
    }

    /// The underlying selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<'a> {
        &self.0
    }
}

/// An `<img>` element.
#[derive(Clone)]
pub struct ImageTag<'a>(Selection<'a>);

impl ImageTag<'_> {
    /// The raw image source (`src`, falling back to `data-src`).
    #[must_use]
    pub fn src(&self) -> Option<String> {
        get_attribute(&self.0, "src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| get_attribute(&self.0, "data-src"))
    }

    /// Intrinsic `(width, height)`, read from the `width`/`height` attributes
    /// (or `data-width`/`data-height`). Unknown dimensions read as 0.
    #[must_use]
    pub fn natural_size(&self) -> (u32, u32) {
        (self.dimension("width"), self.dimension("height"))
    }

    fn dimension(&self, name: &str) -> u32 {
        get_attribute(&self.0, name)
            .or_else(|| get_attribute(&self.0, &format!("data-{name}")))
            .and_then(|v| parse_pixels(&v))
            .unwrap_or(0)
    }
}

/// Parse `"480"` or `"480px"` into pixels.
fn parse_pixels(value: &str) -> Option<u32> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim();
    value.parse::<u32>().ok()
}

// === Tree positions ===

/// Child-index path from the document node to a node.
///
/// Paths compare lexicographically, which is document order: an ancestor
/// sorts before its descendants, and a node before its following siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(pub Vec<usize>);

impl TreePath {
    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn is_prefix_of(&self, other: &TreePath) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Longest shared prefix of two paths.
    #[must_use]
    pub fn common_prefix(&self, other: &TreePath) -> TreePath {
        TreePath(
            self.0
                .iter()
                .zip(&other.0)
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| *a)
                .collect(),
        )
    }

    /// The path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> TreePath {
        let mut path = self.0.clone();
        path.push(index);
        TreePath(path)
    }
}

/// Path of `node` from the document root.
#[must_use]
pub fn path_of(node: NodeRef) -> TreePath {
    let mut indices = Vec::new();
    let mut current = node;

    while let Some(parent) = current.parent() {
        let mut index = 0;
        let mut sibling = current.prev_sibling();
        while let Some(s) = sibling {
            index += 1;
            sibling = s.prev_sibling();
        }
        indices.push(index);
        current = parent;
    }

    indices.reverse();
    TreePath(indices)
}

/// Node at `path`, or `None` if the path leaves the tree.
#[must_use]
pub fn node_at<'a>(doc: &'a Document, path: &TreePath) -> Option<NodeRef<'a>> {
    let mut node = doc.root();
    for &index in &path.0 {
        node = nth_child(node, index)?;
    }
    Some(node)
}

fn nth_child(node: NodeRef, index: usize) -> Option<NodeRef> {
    let mut child = node.first_child();
    for _ in 0..index {
        child = child?.next_sibling();
    }
    child
}

/// Number of child nodes (of any type).
#[must_use]
pub fn child_count(node: NodeRef) -> usize {
    let mut count = 0;
    let mut child = node.first_child();
    while let Some(c) = child {
        count += 1;
        child = c.next_sibling();
    }
    count
}

/// Elements whose text never renders.
const NON_RENDERED: &[&str] = &["script", "style", "noscript", "template"];

/// Visit every rendered text node under `node` in document order with its path.
pub fn walk_text<'a, F>(node: NodeRef<'a>, path: &mut TreePath, visit: &mut F)
where
    F: FnMut(&TreePath, NodeRef<'a>),
{
    if node.is_text() {
        visit(path, node);
        return;
    }
    if node.is_element()
        && node
            .node_name()
            .is_some_and(|t| NON_RENDERED.contains(&t.to_ascii_lowercase().as_str()))
    {
        return;
    }

    let mut index = 0;
    let mut child = node.first_child();
    while let Some(c) = child {
        path.0.push(index);
        walk_text(c, path, visit);
        path.0.pop();
        index += 1;
        child = c.next_sibling();
    }
}
