//! Result types for clip output.
//!
//! This module defines the record produced by an extraction call and the
//! message union the surrounding transport exchanges.

use serde::{Deserialize, Serialize};

use crate::range::Selector;

/// Clip metadata for a page or a selection of a page.
///
/// Built once per extraction call. Every field has a value: a resolver that
/// finds nothing yields the caller's fallback instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeData {
    /// URL of the clipped page.
    pub url: String,

    /// Absolute URL of the page icon, if any icon link was found.
    pub icon: Option<String>,

    /// Hero image URLs, in resolution order. At most four; not de-duplicated.
    pub hero: Vec<String>,

    /// Page title.
    pub title: String,

    /// Page description, or the selected text for a selection clip.
    pub description: String,

    /// Site name.
    pub name: String,

    /// `None` for whole-document clips, one selector for selection clips.
    pub selector: Option<Vec<Selector>>,
}

impl ScrapeData {
    /// Whether this clip covers the whole document.
    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.selector.is_none()
    }
}

/// Raw bytes captured for a page by an archiving path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveData {
    /// URL of the archived page.
    pub url: String,

    /// Archived content.
    pub data: Vec<u8>,
}

/// Messages exchanged with the controlling process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// A finished clip.
    Scraped {
        /// The clip.
        scraped: ScrapeData,
    },
    /// An archived page.
    Archived {
        /// The archive payload.
        archived: ArchiveData,
    },
}

impl Message {
    /// Wrap a clip.
    #[must_use]
    pub fn scraped(scraped: ScrapeData) -> Self {
        Self::Scraped { scraped }
    }

    /// Wrap archived bytes for `url`.
    #[must_use]
    pub fn archived(url: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Archived {
            archived: ArchiveData {
                url: url.into(),
                data: data.into(),
            },
        }
    }
}
