//! Metadata Selectors
//!
//! CSS selectors for every candidate source, grouped by the field they feed.
//! Meta tags are matched on both `name` and `property` because sites mix the
//! two freely for Open Graph and Twitter Card keys.

// ============================================================
// TITLE
// ============================================================

/// `og:title` / `twitter:title`
pub const META_TITLE: &str = "meta[property='og:title'], meta[name='og:title'], \
     meta[name='twitter:title'], meta[property='twitter:title']";

/// hAtom entry titles.
pub const ENTRY_TITLE: &str = ".entry-title";

/// The document `<title>`.
pub const DOCUMENT_TITLE: &str = "title";

/// First-level headings.
pub const HEADINGS: &str = "h1, h2, h3";

// ============================================================
// DESCRIPTION
// ============================================================

/// `twitter:description`
pub const TWITTER_DESCRIPTION: &str =
    "meta[name='twitter:description'], meta[property='twitter:description']";

/// `og:description`
pub const OG_DESCRIPTION: &str = "meta[property='og:description'], meta[name='og:description']";

/// hAtom entry summaries.
pub const ENTRY_SUMMARY: &str = ".entry-summary";

/// Plain `description` meta.
pub const META_DESCRIPTION: &str = "meta[name='description']";

/// Paragraphs scanned for prose.
pub const PARAGRAPHS: &str = "p";

// ============================================================
// SITE NAME
// ============================================================

/// `application-name`
pub const APPLICATION_NAME: &str = "meta[name='application-name']";

/// `og:site_name`
pub const OG_SITE_NAME: &str = "meta[property='og:site_name'], meta[name='og:site_name']";

/// `twitter:site`
pub const TWITTER_SITE: &str = "meta[name='twitter:site'], meta[property='twitter:site']";

// ============================================================
// IMAGES
// ============================================================

/// Open Graph images.
pub const OG_IMAGE: &str = "meta[property='og:image'], meta[name='og:image'], \
     meta[property='og:image:url'], meta[name='og:image:url']";

/// Twitter Card images, including the indexed gallery variants.
pub const TWITTER_IMAGE: &str = "meta[name='twitter:image'], meta[property='twitter:image'], \
     meta[name='twitter:image0'], meta[name='twitter:image1'], \
     meta[name='twitter:image2'], meta[name='twitter:image3']";

/// In-content images.
pub const IMAGES: &str = "img";

// ============================================================
// ICONS
// ============================================================

/// Icon link relations, in declared priority order.
pub const ICON_RELS: &[&str] = &[
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    "mask-icon",
    "icon",
];

/// Every icon link, matched in one pass.
pub const ICON_LINKS: &str = "link[rel='shortcut icon'], link[rel='apple-touch-icon'], \
     link[rel='apple-touch-icon-precomposed'], link[rel='mask-icon'], link[rel='icon']";
