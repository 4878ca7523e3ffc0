//! Favicon resolution.
//!
//! Icons come from `<link>` elements whose `rel` is one of the icon
//! relations. Each [`Icon`] fetches its bytes at most once: the first caller
//! starts the fetch and every later caller, even one arriving while the fetch
//! is still in flight, awaits the same shared result.

use std::sync::{Arc, OnceLock};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::dom::LinkTag;
use crate::error::Result;
use crate::fetch::{Blob, BlobReader, BlobUrlStore, FetchOptions, Fetcher};
use crate::options::IconOrder;
use crate::page::Page;
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};
use crate::url_utils::create_absolute_url;

type SharedBlob = Shared<BoxFuture<'static, Result<Blob>>>;

/// Size reported for `sizes="any"`.
pub const ANY_SIZE: (u32, u32) = (u32::MAX, u32::MAX);

/// One icon link on the page.
pub struct Icon<'a> {
    link: LinkTag<'a>,
    rel: String,
    href: String,
    sizes: String,
    blob: OnceLock<SharedBlob>,
}

impl<'a> Icon<'a> {
    /// Wrap `link`, resolving its `href` against `base`.
    ///
    /// Returns `None` when the link has no usable `href`.
    #[must_use]
    pub fn new(link: LinkTag<'a>, base: &url::Url) -> Option<Self> {
        let href = create_absolute_url(&link.href()?, base)?;
        Some(Self {
            rel: link.rel(),
            sizes: link.sizes(),
            link,
            href,
            blob: OnceLock::new(),
        })
    }

    /// The `type` attribute, e.g. `image/png`. Empty when absent.
    #[must_use]
    pub fn mime_type(&self) -> String {
        self.link.mime_type()
    }

    /// The link relation, e.g. `shortcut icon`.
    #[must_use]
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Absolute icon URL.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Declared sizes as `(width, height)`. `any` reads as [`ANY_SIZE`];
    /// malformed entries are skipped.
    pub fn sizes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.sizes.split_whitespace().filter_map(parse_size)
    }

    /// The icon's bytes.
    ///
    /// Only the first call reaches `fetcher`; the result, success or
    /// failure, is shared with every other call on this icon.
    pub async fn to_blob(&self, fetcher: &Arc<dyn Fetcher>) -> Result<Blob> {
        self.blob
            .get_or_init(|| {
                let fetcher = Arc::clone(fetcher);
                let href = self.href.clone();
                async move {
                    tracing::debug!(href = %href, "fetching icon");
                    let blob = fetcher.fetch(&href, FetchOptions::default()).await;
                    if let Err(err) = &blob {
                        tracing::warn!(href = %href, error = %err, "icon fetch failed");
                    }
                    blob
                }
                .boxed()
                .shared()
            })
            .clone()
            .await
    }

    /// The icon's bytes registered in `store`, as a `blob:` URL.
    pub async fn to_blob_url(&self, fetcher: &Arc<dyn Fetcher>, store: &BlobUrlStore) -> Result<String> {
        let blob = self.to_blob(fetcher).await?;
        store.create_object_url(blob)
    }

    /// The icon's bytes as a `data:` URL.
    pub async fn to_data_url(&self, fetcher: &Arc<dyn Fetcher>, reader: &dyn BlobReader) -> Result<String> {
        let blob = self.to_blob(fetcher).await?;
        reader.read_as_data_url(&blob).await
    }
}

impl std::fmt::Debug for Icon<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("rel", &self.rel)
            .field("href", &self.href)
            .field("sizes", &self.sizes)
            .finish_non_exhaustive()
    }
}

fn parse_size(token: &str) -> Option<(u32, u32)> {
    if token.eq_ignore_ascii_case("any") {
        return Some(ANY_SIZE);
    }
    let (w, h) = token.split_once(['x', 'X'])?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// Position of `rel` in the declared priority list.
fn rel_rank(rel: &str) -> usize {
    meta::ICON_RELS
        .iter()
        .position(|r| *r == rel)
        .unwrap_or(meta::ICON_RELS.len())
}

/// Icons on `page`, lazily, in the order `order` asks for.
pub fn resolve_icons(page: &Page, order: IconOrder) -> Seq<'_, Icon<'_>> {
    let base = page.url();
    let icons = selector::query(meta::ICON_LINKS, decode::link, &page.root())
        .filter_map(move |link| Icon::new(link, base));

    match order {
        IconOrder::DocumentOrder => Box::new(icons),
        IconOrder::RelPriority => Box::new(seq::defer(move || {
            let mut icons: Vec<_> = icons.collect();
            icons.sort_by_key(|icon| rel_rank(icon.rel()));
            icons
        })),
    }
}

/// Absolute URL of the first icon, if any.
#[must_use]
pub fn resolve_icon_href(page: &Page, order: IconOrder) -> Option<String> {
    seq::first(
        seq::map(resolve_icons(page, order), |icon| Some(icon.href)),
        None,
    )
}
