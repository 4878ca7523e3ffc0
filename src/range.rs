//! Document ranges, selections and selector anchors.
//!
//! A [`Range`] is a start/end pair of [`Boundary`] positions. A boundary in a
//! text node counts characters; a boundary in an element counts child nodes,
//! so `(div, 2)` sits just before the div's third child.
//!
//! Turning a range into a portable anchor and back is delegated to a
//! [`SelectorCodec`]. [`TreePathCodec`] is a ready-made codec based on tree
//! paths; any other anchoring scheme can be plugged in.

use dom_query::{Document, NodeRef};
use serde::{Deserialize, Serialize};

use crate::dom::{self, TreePath};
use crate::page::Page;

/// A position in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Container node.
    pub path: TreePath,
    /// Character offset in a text node, child offset in any other node.
    pub offset: usize,
}

impl Boundary {
    /// A boundary inside the node at `path`.
    #[must_use]
    pub fn new(path: TreePath, offset: usize) -> Self {
        Self { path, offset }
    }

    /// Document-order sort key. Element boundaries are rewritten to point at
    /// the child they precede.
    fn key(&self, doc: &Document) -> (TreePath, usize) {
        match dom::node_at(doc, &self.path) {
            Some(node) if !node.is_text() => (self.path.child(self.offset), 0),
            _ => (self.path.clone(), self.offset),
        }
    }
}

/// A contiguous stretch of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Where the range starts.
    pub start: Boundary,
    /// Where the range ends.
    pub end: Boundary,
}

impl Range {
    /// A range between two boundaries.
    #[must_use]
    pub fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// A range covering everything inside `node`.
    #[must_use]
    pub fn select_node_contents(node: NodeRef) -> Self {
        let path = dom::path_of(node);
        let end = if node.is_text() {
            node.text().chars().count()
        } else {
            dom::child_count(node)
        };
        Self::new(Boundary::new(path.clone(), 0), Boundary::new(path, end))
    }

    /// Path of the deepest node containing both boundaries.
    #[must_use]
    pub fn common_ancestor_path(&self) -> TreePath {
        self.start.path.common_prefix(&self.end.path)
    }

    /// The deepest node containing both boundaries. May be a text node.
    #[must_use]
    pub fn common_ancestor<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        dom::node_at(doc, &self.common_ancestor_path())
    }

    /// Whether the range is a bare caret: both boundaries sit at the same
    /// document position.
    #[must_use]
    pub fn is_collapsed(&self, doc: &Document) -> bool {
        self.start.key(doc) == self.end.key(doc)
    }

    /// Whether `node` lies wholly between the boundaries.
    #[must_use]
    pub fn contains_node(&self, doc: &Document, node: NodeRef) -> bool {
        let Some(parent) = node.parent() else {
            return false;
        };
        let path = dom::path_of(node);
        let Some(&index) = path.0.last() else {
            return false;
        };

        let node_start = (path.clone(), 0);
        let node_end = (dom::path_of(parent).child(index + 1), 0);

        self.start.key(doc) <= node_start && node_end <= self.end.key(doc)
    }

    /// Whether any part of `node` lies between the boundaries.
    #[must_use]
    pub fn intersects_node(&self, doc: &Document, node: NodeRef) -> bool {
        let path = dom::path_of(node);
        let (start_path, _) = self.start.key(doc);
        let end = self.end.key(doc);

        let before_start = path < start_path && !path.is_prefix_of(&start_path);
        let after_end = (path, 0) >= end;
        !before_start && !after_end
    }

    /// Rendered text between the boundaries. Script and style contents are
    /// skipped.
    #[must_use]
    pub fn text(&self, doc: &Document) -> String {
        let (start_path, start_offset) = self.start.key(doc);
        let (end_path, end_offset) = self.end.key(doc);
        let mut out = String::new();

        dom::walk_text(doc.root(), &mut TreePath::default(), &mut |path, node| {
            if *path < start_path || *path > end_path {
                return;
            }
            let from = if *path == start_path { start_offset } else { 0 };
            let text = node.text();
            let to = if *path == end_path {
                end_offset
            } else {
                text.chars().count()
            };
            if from < to {
                out.extend(text.chars().skip(from).take(to - from));
            }
        });

        out
    }
}

/// The user's current selection: a page and one or more ranges on it.
#[derive(Debug, Clone)]
pub struct RangeSelection<'p> {
    page: &'p Page,
    ranges: Vec<Range>,
}

impl<'p> RangeSelection<'p> {
    /// A selection over `ranges`, or `None` when there are none. Collapsed
    /// ranges select nothing and are dropped.
    #[must_use]
    pub fn new(page: &'p Page, mut ranges: Vec<Range>) -> Option<Self> {
        ranges.retain(|r| !r.is_collapsed(page.document()));
        if ranges.is_empty() {
            None
        } else {
            Some(Self { page, ranges })
        }
    }

    /// Rebuild a selection from stored anchors. Anchors that no longer
    /// resolve are skipped.
    pub fn from_selectors<C>(page: &'p Page, codec: &C, selectors: &[Selector]) -> Option<Self>
    where
        C: SelectorCodec + ?Sized,
    {
        let ranges = selectors
            .iter()
            .filter_map(|s| codec.resolve_selector(page, s))
            .collect();
        Self::new(page, ranges)
    }

    /// The selected page.
    #[must_use]
    pub fn page(&self) -> &'p Page {
        self.page
    }

    /// All ranges, in the order they were selected.
    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// The first range; the only one extraction looks at.
    #[must_use]
    pub fn first_range(&self) -> &Range {
        // `new` guarantees at least one range
        &self.ranges[0]
    }

    /// Rendered text of every range, concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        self.ranges
            .iter()
            .map(|r| r.text(self.page.document()))
            .collect()
    }
}

/// Opaque, serializable anchor for a range, produced by a [`SelectorCodec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(pub serde_json::Value);

/// Converts ranges to portable anchors and back.
pub trait SelectorCodec {
    /// Anchor for `range` on `page`.
    fn get_range_selector(&self, page: &Page, range: &Range) -> Selector;

    /// The range `selector` points at, or `None` if it no longer resolves.
    fn resolve_selector(&self, page: &Page, selector: &Selector) -> Option<Range>;
}

/// Anchors ranges by their tree paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePathCodec;

const TREE_PATH_SELECTOR: &str = "TreePathSelector";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreePathSelector {
    #[serde(rename = "type")]
    kind: String,
    start: TreePath,
    start_offset: usize,
    end: TreePath,
    end_offset: usize,
}

impl SelectorCodec for TreePathCodec {
    fn get_range_selector(&self, _page: &Page, range: &Range) -> Selector {
        let selector = TreePathSelector {
            kind: TREE_PATH_SELECTOR.to_string(),
            start: range.start.path.clone(),
            start_offset: range.start.offset,
            end: range.end.path.clone(),
            end_offset: range.end.offset,
        };
        Selector(serde_json::to_value(selector).unwrap_or_default())
    }

    fn resolve_selector(&self, page: &Page, selector: &Selector) -> Option<Range> {
        let parsed: TreePathSelector = serde_json::from_value(selector.0.clone()).ok()?;
        if parsed.kind != TREE_PATH_SELECTOR {
            return None;
        }
        let doc = page.document();
        dom::node_at(doc, &parsed.start)?;
        dom::node_at(doc, &parsed.end)?;

        Some(Range::new(
            Boundary::new(parsed.start, parsed.start_offset),
            Boundary::new(parsed.end, parsed.end_offset),
        ))
    }
}
