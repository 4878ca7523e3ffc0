//! # page-clip
//!
//! Heuristic clip metadata for web pages: title, description, site name,
//! hero images and favicon, for a whole page or for the part of it the user
//! selected.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_clip::{clip, Page};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let html = r#"<html><head><title>My Article | My Blog</title>
//! <meta property="og:site_name" content="My Blog"></head>
//! <body><article><p>Main content here.</p></article></body></html>"#;
//!
//! let page = Page::new(html, "https://example.com/post")?;
//! let data = clip(&page).await?;
//! assert_eq!(data.name, "My Blog");
//! assert!(data.selector.is_none());
//! # Ok::<(), page_clip::Error>(())
//! # }).unwrap();
//! ```
//!
//! ## How fields are resolved
//!
//! Every field is a chain of candidate sources tried in priority order, built
//! from lazy sequences: a later, more expensive source (scanning every
//! paragraph) is only consulted when every earlier one (meta tags) came up
//! empty. No source can fail; a field nobody answers gets the caller's
//! fallback from [`ClipOptions`].
//!
//! With an active selection, description and hero image come from the
//! selection and the result carries a [`Selector`] anchoring it.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter and the tagged element model.
pub mod dom;

/// Selector infrastructure: the lazy query adapter, decoders and the
/// candidate selectors.
pub mod selector;

/// Lazy sequence primitives for candidate chains.
pub mod seq;

/// Field resolvers (title, description, site name, hero images).
pub mod metadata;

/// Selection-scoped resolvers.
pub mod selection;

/// Favicon resolution with per-icon memoized fetches.
pub mod icon;

/// Fetch and blob read-out collaborators.
pub mod fetch;

/// Pages and readiness.
pub mod page;

/// Document ranges, selections and selector anchors.
pub mod range;

/// URL resolution helpers.
pub mod url_utils;

/// Charset sniffing for byte input.
pub mod encoding;

/// Content-yness scoring and description qualification.
pub mod scoring;

/// Link density testing for boilerplate detection.
pub mod link_density;

// Public API - re-exports
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::{Blob, BlobReader, BlobUrlStore, DataUrlReader, FetchOptions, Fetcher};
pub use icon::Icon;
pub use options::{ClipOptions, IconOrder};
pub use page::{Page, ReadyHandle, ReadyState};
pub use range::{Boundary, Range, RangeSelection, Selector, SelectorCodec, TreePathCodec};
pub use result::{ArchiveData, Message, ScrapeData};

/// Clip a page with default options.
///
/// Waits for the page to finish loading. Clips the active selection if the
/// page has one, the whole document otherwise. Selections are anchored with
/// [`TreePathCodec`].
pub async fn clip(page: &Page) -> Result<ScrapeData> {
    clip_with_options(page, &ClipOptions::default(), &TreePathCodec).await
}

/// Clip a page with custom options and selector codec.
///
/// # Example
///
/// ```rust
/// use page_clip::{clip_with_options, ClipOptions, Page, TreePathCodec};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let page = Page::new("<html><body></body></html>", "https://example.com/")?;
/// let options = ClipOptions {
///     title_fallback: "Untitled".to_string(),
///     ..ClipOptions::default()
/// };
/// let data = clip_with_options(&page, &options, &TreePathCodec).await?;
/// assert_eq!(data.title, "Untitled");
/// # Ok::<(), page_clip::Error>(())
/// # }).unwrap();
/// ```
pub async fn clip_with_options<C>(page: &Page, options: &ClipOptions, codec: &C) -> Result<ScrapeData>
where
    C: SelectorCodec + ?Sized,
{
    extract::clip_page(page, options, codec).await
}

/// Clip the whole document, ignoring any selection.
///
/// The result's `selector` is always `None`.
pub async fn clip_summary(page: &Page, options: &ClipOptions) -> Result<ScrapeData> {
    extract::clip_summary(page, options).await
}

/// Clip a selection.
///
/// Title, icon and site name still come from the whole page. The result's
/// `selector` holds exactly one anchor, for the first range.
pub async fn clip_selection<C>(
    selection: &RangeSelection<'_>,
    options: &ClipOptions,
    codec: &C,
) -> Result<ScrapeData>
where
    C: SelectorCodec + ?Sized,
{
    extract::clip_selection(selection, options, codec).await
}
