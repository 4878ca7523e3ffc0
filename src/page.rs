//! The page being clipped.
//!
//! A [`Page`] owns the parsed document, its URL, a ready-state signal and the
//! user's active selection, if any. Extraction waits for the page to report
//! [`ReadyState::Complete`] before reading anything.

use std::time::Duration;

use dom_query::{Document, Selection};
use tokio::sync::watch;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::range::{Range, RangeSelection};

/// Loading state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    /// Still being parsed.
    Loading,
    /// Parsed; subresources still loading.
    Interactive,
    /// Fully loaded.
    Complete,
}

/// Sender side of a page's ready state.
///
/// Returned by [`Page::loading`]; whoever drives the load reports progress
/// through it.
#[derive(Debug)]
pub struct ReadyHandle(watch::Sender<ReadyState>);

impl ReadyHandle {
    /// Report a new ready state.
    pub fn set(&self, state: ReadyState) {
        self.0.send_replace(state);
    }

    /// Report that loading finished.
    pub fn complete(&self) {
        self.set(ReadyState::Complete);
    }
}

/// A parsed document plus the context extraction needs.
pub struct Page {
    document: Document,
    url: Url,
    ready: watch::Receiver<ReadyState>,
    selection: Vec<Range>,
}

impl Page {
    /// A fully loaded page.
    pub fn new(html: &str, url: &str) -> Result<Self> {
        let (page, handle) = Self::loading(html, url)?;
        handle.complete();
        Ok(page)
    }

    /// A fully loaded page from raw bytes.
    ///
    /// `content_type` is the transport `Content-Type`, if known; its charset
    /// wins over `<meta>` declarations.
    pub fn from_bytes(html: &[u8], url: &str, content_type: Option<&str>) -> Result<Self> {
        Self::new(&encoding::decode(html, content_type), url)
    }

    /// A page that is still loading. It becomes complete once the returned
    /// handle says so.
    pub fn loading(html: &str, url: &str) -> Result<(Self, ReadyHandle)> {
        let url = Url::parse(url)?;
        let (tx, rx) = watch::channel(ReadyState::Loading);
        let page = Self {
            document: Document::from(html),
            url,
            ready: rx,
            selection: Vec::new(),
        };
        Ok((page, ReadyHandle(tx)))
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Root of the document, for queries.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        Selection::from(self.document.root())
    }

    /// The page URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Current ready state.
    #[must_use]
    pub fn ready_state(&self) -> ReadyState {
        *self.ready.borrow()
    }

    /// Wait until the page reports [`ReadyState::Complete`].
    ///
    /// Returns at once when already complete. Without a timeout this waits
    /// indefinitely, including when the ready handle was dropped early.
    pub async fn wait_until_complete(&self, timeout: Option<Duration>) -> Result<()> {
        let mut ready = self.ready.clone();
        let wait = async move {
            if ready.wait_for(|state| *state == ReadyState::Complete).await.is_err() {
                tracing::warn!("ready handle dropped before completion");
                std::future::pending::<()>().await;
            }
        };

        match timeout {
            None => {
                wait.await;
                Ok(())
            }
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| Error::NotReady(limit)),
        }
    }

    /// Replace the active selection. An empty list clears it.
    pub fn set_selection(&mut self, ranges: Vec<Range>) {
        self.selection = ranges;
    }

    /// Drop the active selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The active selection, if the user has one.
    #[must_use]
    pub fn selection(&self) -> Option<RangeSelection<'_>> {
        RangeSelection::new(self, self.selection.clone())
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url.as_str())
            .field("ready", &self.ready_state())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
