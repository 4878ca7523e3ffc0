//! Selector Infrastructure
//!
//! The query adapter every resolver goes through. A query pairs a CSS
//! selector with a decode function and yields decoded values lazily, in
//! document order, skipping matches the decoder rejects.
//!
//! Resolvers only ever see `query` plus the sequence helpers in
//! [`crate::seq`], so how structural matching is done stays in this module.

use dom_query::{NodeRef, Selection};

pub mod decode;
pub mod meta;

/// Lazy sequence of decoded matches.
///
/// The structural match itself runs when the first element is pulled, so a
/// query placed late in a candidate chain costs nothing if an earlier source
/// answered.
pub struct Query<'a, F> {
    selector: &'a str,
    root: Selection<'a>,
    decode: F,
    matches: Option<std::vec::IntoIter<NodeRef<'a>>>,
}

/// Match `selector` under `root`, decoding each match with `decode`.
///
/// `decode` must not fail for an unexpected node shape; it returns `None`
/// and the node is skipped. An invalid selector yields an empty sequence.
///
/// # Example
///
/// ```rust
/// use page_clip::dom;
/// use page_clip::selector::{self, decode};
///
/// let doc = dom::parse(r#"<p>one</p><div>skip</div><p>two</p>"#);
/// let texts: Vec<String> = selector::query("p", decode::text, &doc.select("html")).collect();
/// assert_eq!(texts, vec!["one", "two"]);
/// ```
pub fn query<'a, R, F>(selector: &'a str, decode: F, root: &Selection<'a>) -> Query<'a, F>
where
    F: FnMut(NodeRef<'a>) -> Option<R>,
{
    Query {
        selector,
        root: root.clone(),
        decode,
        matches: None,
    }
}

impl<'a, R, F> Iterator for Query<'a, F>
where
    F: FnMut(NodeRef<'a>) -> Option<R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let matches = self.matches.get_or_insert_with(|| {
            tracing::trace!(selector = self.selector, "running query");
            self.root
                .try_select(self.selector)
                .map(|sel| sel.nodes().to_vec())
                .unwrap_or_default()
                .into_iter()
        });

        matches.find_map(&mut self.decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use std::cell::Cell;

    #[test]
    fn test_query_preserves_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <p class="item">1</p>
                <section>
                    <p class="item">2</p>
                </section>
                <p class="item">3</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let results: Vec<String> = query(".item", decode::text, &root).collect();
        assert_eq!(results, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_skips_rejected_nodes() {
        let doc = dom::parse(r#"<div><p>keep</p><p>   </p><p>also</p></div>"#);
        let results: Vec<String> = query("p", decode::text, &doc.select("div")).collect();
        assert_eq!(results, vec!["keep", "also"]);
    }

    #[test]
    fn test_query_is_lazy_until_pulled() {
        let doc = dom::parse(r#"<div><p>a</p><p>b</p><p>c</p></div>"#);
        let decoded = Cell::new(0);
        let mut results = query(
            "p",
            |node: NodeRef| {
                decoded.set(decoded.get() + 1);
                decode::text(node)
            },
            &doc.select("div"),
        );

        assert_eq!(decoded.get(), 0);
        assert_eq!(results.next(), Some("a".to_string()));
        assert_eq!(decoded.get(), 1);
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let doc = dom::parse("<div><p>content</p></div>");
        let mut results = query("p[", decode::text, &doc.select("div"));
        assert!(results.next().is_none());
    }

    #[test]
    fn test_query_returns_nothing_when_no_match() {
        let doc = dom::parse("<div><p>content</p></div>");
        let mut results = query("article", decode::text, &doc.select("div"));
        assert!(results.next().is_none());
    }
}
