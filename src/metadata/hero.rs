//! Hero image resolution.

use crate::options::ClipOptions;
use crate::page::Page;
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};
use crate::url_utils::create_absolute_url;

/// Hard cap on hero images in any clip.
pub const MAX_HERO: usize = 4;

/// Hero image URLs for the whole document, lazily and without limit.
///
/// Open Graph images first, then Twitter Card images, then `<img>` elements
/// larger than `min_width`×`min_height`. URLs are made absolute; empty ones
/// are dropped. Duplicates are kept.
pub fn hero_candidates(page: &Page, min_width: u32, min_height: u32) -> Seq<'_, String> {
    let root = page.root();
    let base = page.url();

    let images = seq::filter(
        selector::query(meta::IMAGES, decode::image, &root),
        move |img| {
            let (width, height) = img.natural_size();
            width > min_width && height > min_height
        },
    )
    .filter_map(|img| img.src());

    let sources: Vec<Seq<'_, String>> = vec![
        Box::new(selector::query(meta::OG_IMAGE, decode::meta_content, &root)),
        Box::new(selector::query(meta::TWITTER_IMAGE, decode::meta_content, &root)),
        Box::new(images),
    ];

    Box::new(seq::concat(sources).filter_map(move |url| create_absolute_url(&url, base)))
}

/// The first `hero_limit` hero images of the page, never more than
/// [`MAX_HERO`].
#[must_use]
pub fn resolve_hero(page: &Page, options: &ClipOptions) -> Vec<String> {
    seq::take(
        options.hero_limit.min(MAX_HERO),
        hero_candidates(page, options.hero_min_width, options.hero_min_height),
    )
    .collect()
}
