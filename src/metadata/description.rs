//! Description resolution.

use crate::page::Page;
use crate::scoring::is_description_candidate;
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};

/// Resolve the page description.
///
/// Candidates, in order: `twitter:description`, `og:description`,
/// `.entry-summary`, `<meta name="description">`, then the first paragraph
/// that reads like prose (see [`is_description_candidate`]). The paragraph
/// scan only runs when every meta source came up empty.
#[must_use]
pub fn resolve_description(page: &Page, fallback: &str, baseline: usize) -> String {
    seq::first(description_candidates(page, baseline), fallback.to_string())
}

fn description_candidates(page: &Page, baseline: usize) -> Seq<'_, String> {
    let root = page.root();
    let paragraphs = seq::filter(
        selector::query(meta::PARAGRAPHS, decode::element, &root),
        move |p| is_description_candidate(p, baseline),
    )
    .filter_map(|p| seq::non_blank(p.text().to_string()));

    let sources: Vec<Seq<'_, String>> = vec![
        Box::new(selector::query(meta::TWITTER_DESCRIPTION, decode::meta_content, &root)),
        Box::new(selector::query(meta::OG_DESCRIPTION, decode::meta_content, &root)),
        Box::new(selector::query(meta::ENTRY_SUMMARY, decode::text, &root)),
        Box::new(selector::query(meta::META_DESCRIPTION, decode::meta_content, &root)),
        Box::new(paragraphs),
    ];
    seq::concat(sources)
}
