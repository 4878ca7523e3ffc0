//! Site name resolution.

use crate::page::Page;
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};

/// Resolve the site name from `application-name`, `og:site_name` or
/// `twitter:site`, in that order.
#[must_use]
pub fn resolve_site_name(page: &Page, fallback: &str) -> String {
    let root = page.root();
    let sources: Vec<Seq<'_, String>> = vec![
        Box::new(selector::query(meta::APPLICATION_NAME, decode::meta_content, &root)),
        Box::new(selector::query(meta::OG_SITE_NAME, decode::meta_content, &root)),
        Box::new(selector::query(meta::TWITTER_SITE, decode::meta_content, &root)),
    ];
    seq::first(seq::concat(sources), fallback.to_string())
}
