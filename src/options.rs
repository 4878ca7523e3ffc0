//! Configuration options for clip extraction.
//!
//! The `ClipOptions` struct carries the caller fallbacks for every field and
//! the thresholds used by the hero-image and paragraph heuristics.

use std::time::Duration;

/// Order in which matched icon links are turned into [`crate::Icon`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconOrder {
    /// Icons are produced in document order of the matching `<link>` nodes,
    /// whatever their `rel`.
    #[default]
    DocumentOrder,

    /// Icons are produced by declared `rel` priority (`shortcut icon` first,
    /// plain `icon` last), ties broken by document order.
    RelPriority,
}

/// Configuration options for clip extraction.
///
/// # Example
///
/// ```rust
/// use page_clip::ClipOptions;
///
/// let options = ClipOptions {
///     title_fallback: "Untitled".to_string(),
///     ..ClipOptions::default()
/// };
/// assert_eq!(options.hero_limit, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ClipOptions {
    /// Title used when no title candidate is found.
    ///
    /// Default: `""`
    pub title_fallback: String,

    /// Description used when no description candidate is found.
    ///
    /// Default: `""`
    pub description_fallback: String,

    /// Site name used when no site-name candidate is found.
    ///
    /// Default: `""`
    pub name_fallback: String,

    /// Maximum number of hero images kept for a whole-document clip.
    /// Values above [`crate::metadata::MAX_HERO`] are clamped to it.
    ///
    /// Default: `4`
    pub hero_limit: usize,

    /// In-content images must be strictly wider than this to count as heroes.
    ///
    /// Default: `480`
    pub hero_min_width: u32,

    /// In-content images must be strictly taller than this to count as heroes.
    ///
    /// Default: `300`
    pub hero_min_height: u32,

    /// Minimum width of an image inside a selection.
    ///
    /// Default: `200`
    pub selection_image_min_width: u32,

    /// Minimum height of an image inside a selection.
    ///
    /// Default: `100`
    pub selection_image_min_height: u32,

    /// A paragraph must score strictly above this to be used as a description.
    ///
    /// Default: `3`
    pub contenty_baseline: usize,

    /// How long to wait for the document to report completion.
    ///
    /// `None` waits as long as it takes.
    ///
    /// Default: `None`
    pub ready_timeout: Option<Duration>,

    /// Ordering applied to matched icon links.
    ///
    /// Default: [`IconOrder::DocumentOrder`]
    pub icon_order: IconOrder,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            title_fallback: String::new(),
            description_fallback: String::new(),
            name_fallback: String::new(),
            hero_limit: 4,
            hero_min_width: 480,
            hero_min_height: 300,
            selection_image_min_width: 200,
            selection_image_min_height: 100,
            contenty_baseline: 3,
            ready_timeout: None,
            icon_order: IconOrder::DocumentOrder,
        }
    }
}
