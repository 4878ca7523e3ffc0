//! Clip orchestration.
//!
//! Waits for the page to finish loading, then assembles a [`ScrapeData`]
//! from the field resolvers. Title, icon and site name always come from the
//! whole document; description and hero image narrow to the selection when
//! there is one.

use crate::error::Result;
use crate::icon::resolve_icon_href;
use crate::metadata::{resolve_description, resolve_hero, resolve_site_name, resolve_title};
use crate::options::ClipOptions;
use crate::page::Page;
use crate::range::{RangeSelection, SelectorCodec};
use crate::result::ScrapeData;
use crate::selection::{
    resolve_selection_description, resolve_selection_hero, resolve_selection_selector,
};

/// Clip `page`: the active selection if it has one, otherwise the whole
/// document.
pub(crate) async fn clip_page<C>(page: &Page, options: &ClipOptions, codec: &C) -> Result<ScrapeData>
where
    C: SelectorCodec + ?Sized,
{
    match page.selection() {
        Some(selection) => clip_selection(&selection, options, codec).await,
        None => clip_summary(page, options).await,
    }
}

/// Clip the whole document.
pub(crate) async fn clip_summary(page: &Page, options: &ClipOptions) -> Result<ScrapeData> {
    page.wait_until_complete(options.ready_timeout).await?;

    let data = ScrapeData {
        hero: resolve_hero(page, options),
        description: resolve_description(page, &options.description_fallback, options.contenty_baseline),
        selector: None,
        ..document_fields(page, options)
    };

    tracing::debug!(
        url = %data.url,
        hero = data.hero.len(),
        icon = data.icon.is_some(),
        "clipped page"
    );
    Ok(data)
}

/// Clip a selection.
pub(crate) async fn clip_selection<C>(
    selection: &RangeSelection<'_>,
    options: &ClipOptions,
    codec: &C,
) -> Result<ScrapeData>
where
    C: SelectorCodec + ?Sized,
{
    let page = selection.page();
    page.wait_until_complete(options.ready_timeout).await?;

    if selection.ranges().len() > 1 {
        tracing::debug!(ranges = selection.ranges().len(), "using first range only");
    }

    let data = ScrapeData {
        hero: resolve_selection_hero(selection, options),
        description: resolve_selection_description(selection),
        selector: Some(resolve_selection_selector(selection, codec)),
        ..document_fields(page, options)
    };

    tracing::debug!(
        url = %data.url,
        hero = data.hero.len(),
        description_len = data.description.len(),
        "clipped selection"
    );
    Ok(data)
}

/// Fields resolved from the whole document regardless of selection.
fn document_fields(page: &Page, options: &ClipOptions) -> ScrapeData {
    ScrapeData {
        url: page.url().to_string(),
        icon: resolve_icon_href(page, options.icon_order),
        title: resolve_title(page, &options.title_fallback),
        name: resolve_site_name(page, &options.name_fallback),
        ..ScrapeData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{Range, TreePathCodec};

    const HTML: &str = r#"<html><head>
        <title>Clip Test | Example</title>
        <meta name="description" content="A page for testing.">
        <meta property="og:image" content="/og.png">
        <link rel="icon" href="/favicon.ico">
    </head><body><article><p id="sel">Selected words here.</p></article></body></html>"#;

    #[tokio::test]
    async fn summary_has_no_selector() {
        let page = Page::new(HTML, "https://example.com/a").unwrap_or_else(|e| panic!("{e}"));
        let data = clip_summary(&page, &ClipOptions::default())
            .await
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(data.url, "https://example.com/a");
        assert_eq!(data.title, "Clip Test | Example");
        assert_eq!(data.description, "A page for testing.");
        assert_eq!(data.icon.as_deref(), Some("https://example.com/favicon.ico"));
        assert_eq!(data.hero, vec!["https://example.com/og.png".to_string()]);
        assert!(data.selector.is_none());
    }

    #[tokio::test]
    async fn dispatches_on_active_selection() {
        let mut page = Page::new(HTML, "https://example.com/a").unwrap_or_else(|e| panic!("{e}"));
        let range = Range::select_node_contents(page.document().select("#sel").nodes()[0]);
        page.set_selection(vec![range]);

        let data = clip_page(&page, &ClipOptions::default(), &TreePathCodec)
            .await
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(data.description, "Selected words here.");
        assert_eq!(data.title, "Clip Test | Example");
        assert_eq!(data.selector.map(|s| s.len()), Some(1));

        page.clear_selection();
        let data = clip_page(&page, &ClipOptions::default(), &TreePathCodec)
            .await
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(data.selector.is_none());
    }
}
