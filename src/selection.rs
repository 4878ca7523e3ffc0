//! Selection-scoped resolvers.
//!
//! When the user has selected part of a page, description and hero image
//! come from the selection instead of the whole document. Only the first
//! range of a multi-range selection is looked at here.

use dom_query::{NodeRef, Selection};

use crate::metadata::hero_candidates;
use crate::options::ClipOptions;
use crate::range::{RangeSelection, Selector, SelectorCodec};
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};
use crate::url_utils::create_absolute_url;

/// Images inside the first range that are at least `min_width`×`min_height`.
///
/// Empty when the range's common ancestor is not an element, e.g. a
/// selection within a single text node.
pub fn selection_images<'p>(
    selection: &RangeSelection<'p>,
    min_width: u32,
    min_height: u32,
) -> Seq<'p, String> {
    let page = selection.page();
    let doc = page.document();
    let range = selection.first_range().clone();

    let Some(ancestor) = range.common_ancestor(doc).filter(NodeRef::is_element) else {
        tracing::trace!("selection ancestor is not an element");
        return Box::new(std::iter::empty());
    };

    let base = page.url();
    let images = selector::query(
        meta::IMAGES,
        |node| decode::image(node).map(|img| (node, img)),
        &Selection::from(ancestor),
    )
    .filter(move |(node, img)| {
        let (width, height) = img.natural_size();
        width >= min_width && height >= min_height && range.contains_node(doc, *node)
    })
    .filter_map(move |(_, img)| create_absolute_url(&img.src()?, base));

    Box::new(images)
}

/// The hero image of a selection: the first in-selection image, else the
/// first document hero image. At most one entry.
#[must_use]
pub fn resolve_selection_hero(selection: &RangeSelection<'_>, options: &ClipOptions) -> Vec<String> {
    let sources: Vec<Seq<'_, String>> = vec![
        selection_images(
            selection,
            options.selection_image_min_width,
            options.selection_image_min_height,
        ),
        hero_candidates(selection.page(), options.hero_min_width, options.hero_min_height),
    ];
    seq::take(1, seq::concat(sources)).collect()
}

/// The selected text, trimmed.
#[must_use]
pub fn resolve_selection_description(selection: &RangeSelection<'_>) -> String {
    selection.text().trim().to_string()
}

/// A one-element anchor list for the selection's first range.
#[must_use]
pub fn resolve_selection_selector<C>(selection: &RangeSelection<'_>, codec: &C) -> Vec<Selector>
where
    C: SelectorCodec + ?Sized,
{
    vec![codec.get_range_selector(selection.page(), selection.first_range())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::page::Page;
    use crate::range::{Boundary, Range, TreePathCodec};

    const HTML: &str = r#"<html><head><meta property="og:image" content="/og.jpg"></head><body><article id="post"><p id="lead">Lead paragraph text.</p><img id="big" src="/figure.png" width="300" height="150"><img id="tiny" src="/dot.png" width="10" height="10"><p id="tail">Tail text.</p></article><img id="out" src="/outside.png" width="900" height="900"></body></html>"#;

    fn page() -> Page {
        Page::new(HTML, "https://example.com/").unwrap_or_else(|e| panic!("{e}"))
    }

    fn whole(page: &Page, sel: &str) -> Range {
        Range::select_node_contents(page.document().select(sel).nodes()[0])
    }

    #[test]
    fn images_inside_selection_only() {
        let page = page();
        let selection = RangeSelection::new(&page, vec![whole(&page, "#post")])
            .unwrap_or_else(|| panic!("selection"));

        let images: Vec<String> = selection_images(&selection, 200, 100).collect();
        assert_eq!(images, vec!["https://example.com/figure.png".to_string()]);
    }

    #[test]
    fn selection_image_beats_og_image() {
        let page = page();
        let selection = RangeSelection::new(&page, vec![whole(&page, "#post")])
            .unwrap_or_else(|| panic!("selection"));

        assert_eq!(
            resolve_selection_hero(&selection, &ClipOptions::default()),
            vec!["https://example.com/figure.png".to_string()]
        );
    }

    #[test]
    fn falls_back_to_document_hero() {
        let page = page();
        let selection = RangeSelection::new(&page, vec![whole(&page, "#tail")])
            .unwrap_or_else(|| panic!("selection"));

        assert_eq!(
            resolve_selection_hero(&selection, &ClipOptions::default()),
            vec!["https://example.com/og.jpg".to_string()]
        );
    }

    #[test]
    fn text_node_selection_has_no_images() {
        let page = page();
        let text = page.document().select("#lead").nodes()[0]
            .first_child()
            .unwrap_or_else(|| panic!("text"));
        let path = dom::path_of(text);
        let range = Range::new(Boundary::new(path.clone(), 0), Boundary::new(path, 4));
        let selection = RangeSelection::new(&page, vec![range]).unwrap_or_else(|| panic!("selection"));

        assert_eq!(selection_images(&selection, 0, 0).count(), 0);
        assert_eq!(resolve_selection_description(&selection), "Lead");
    }

    #[test]
    fn description_is_trimmed_text_of_all_ranges() {
        let page = page();
        let selection = RangeSelection::new(&page, vec![whole(&page, "#lead"), whole(&page, "#tail")])
            .unwrap_or_else(|| panic!("selection"));

        assert_eq!(
            resolve_selection_description(&selection),
            "Lead paragraph text.Tail text."
        );
    }

    #[test]
    fn selector_covers_first_range_only() {
        let page = page();
        let first = whole(&page, "#lead");
        let selection = RangeSelection::new(&page, vec![first.clone(), whole(&page, "#tail")])
            .unwrap_or_else(|| panic!("selection"));

        let selectors = resolve_selection_selector(&selection, &TreePathCodec);
        assert_eq!(selectors.len(), 1);
        assert_eq!(TreePathCodec.resolve_selector(&page, &selectors[0]), Some(first));
    }
}
