//! Title resolution.

use crate::page::Page;
use crate::patterns::{SPACED_TITLE_SEPARATOR, TITLE_SEPARATOR};
use crate::selector::{self, decode, meta};
use crate::seq::{self, Seq};

/// Words a title must keep after stripping a spaced suffix.
const MIN_WORDS_SPACED: usize = 3;

/// Words a title must keep after splitting on a bare separator.
const MIN_WORDS_BARE: usize = 5;

/// Resolve the page title.
///
/// Candidates, in order:
/// 1. `og:title` / `twitter:title`
/// 2. `.entry-title`
/// 3. `<title>`, cleaned with [`clean_title`]
/// 4. the first `h1`/`h2`/`h3`
/// 5. `fallback`
#[must_use]
pub fn resolve_title(page: &Page, fallback: &str) -> String {
    seq::first(title_candidates(page), fallback.to_string())
}

fn title_candidates(page: &Page) -> Seq<'_, String> {
    let root = page.root();
    let sources: Vec<Seq<'_, String>> = vec![
        Box::new(selector::query(meta::META_TITLE, decode::meta_content, &root)),
        Box::new(selector::query(meta::ENTRY_TITLE, decode::text, &root)),
        Box::new(seq::map(
            selector::query(meta::DOCUMENT_TITLE, decode::text, &root),
            |title| clean_title(&title),
        )),
        Box::new(selector::query(meta::HEADINGS, decode::text, &root)),
    ];
    seq::concat(sources)
}

/// Strip a site-name suffix from a document title.
///
/// `"My Great Post | My Blog"` becomes `"My Great Post"`. The text before the
/// last spaced separator (`|`, `-`, `:`) is kept when it still has at least
/// three words. When it has fewer, the text after the first bare separator is
/// tried instead and kept when it has at least five words, which catches
/// `"Site|Headline"` prefixes. Titles without a spaced separator, and titles
/// where neither split is good enough, come back trimmed but otherwise intact.
///
/// # Examples
///
/// ```
/// use page_clip::metadata::clean_title;
///
/// assert_eq!(clean_title("My Great Post | My Blog"), "My Great Post");
/// assert_eq!(clean_title("A | B"), "A | B");
/// assert_eq!(clean_title("Living with self-hosted mail"), "Living with self-hosted mail");
/// ```
#[must_use]
pub fn clean_title(title: &str) -> String {
    let title = title.trim();

    if let Some(sep) = SPACED_TITLE_SEPARATOR.find_iter(title).last() {
        let head = title[..sep.start()].trim();
        if word_count(head) >= MIN_WORDS_SPACED {
            return head.to_string();
        }

        if let Some(bare) = TITLE_SEPARATOR.find(title) {
            let tail = title[bare.end()..].trim();
            if word_count(tail) >= MIN_WORDS_BARE {
                return tail.to_string();
            }
        }
    }

    title.to_string()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::new(html, "https://example.com/").unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn clean_title_strips_site_suffix() {
        assert_eq!(clean_title("My Great Post | My Blog"), "My Great Post");
        assert_eq!(clean_title("How to Bake Bread - Kitchen Notes"), "How to Bake Bread");
    }

    #[test]
    fn clean_title_keeps_short_titles() {
        assert_eq!(clean_title("A | B"), "A | B");
        assert_eq!(clean_title("  News: Today  "), "News: Today");
    }

    #[test]
    fn clean_title_without_separator_is_trimmed_identity() {
        assert_eq!(clean_title("  Just a plain title  "), "Just a plain title");
    }

    #[test]
    fn clean_title_strips_only_the_last_suffix() {
        assert_eq!(
            clean_title("Part One - The Long Road Home | Fiction Weekly"),
            "Part One - The Long Road Home"
        );
    }

    #[test]
    fn clean_title_retries_on_bare_separator() {
        assert_eq!(
            clean_title("News | Government announces a brand new policy"),
            "Government announces a brand new policy"
        );
        // retry still too short: keep the original
        assert_eq!(clean_title("News | Short take here"), "News | Short take here");
    }

    #[test]
    fn clean_title_leaves_unspaced_separators_alone() {
        assert_eq!(
            clean_title("How I learned to stop worrying about self-hosting"),
            "How I learned to stop worrying about self-hosting"
        );
        assert_eq!(clean_title("Well-known facts"), "Well-known facts");
        assert_eq!(
            clean_title(" Rust 2024: what changed for the borrow checker "),
            "Rust 2024: what changed for the borrow checker"
        );
    }

    #[test]
    fn meta_title_wins() {
        let page = page(
            r#"<html><head><title>Doc Title | Site</title>
            <meta property="og:title" content="OG Title"></head>
            <body><h1 class="entry-title">Entry</h1></body></html>"#,
        );
        assert_eq!(resolve_title(&page, "fallback"), "OG Title");
    }

    #[test]
    fn entry_title_before_document_title() {
        let page = page(
            r#"<html><head><title>Doc</title></head>
            <body><h2 class="entry-title"> Entry Title </h2></body></html>"#,
        );
        assert_eq!(resolve_title(&page, "fallback"), "Entry Title");
    }

    #[test]
    fn heading_when_no_title_element() {
        let page = page("<html><body><h3>Third</h3><h1>First</h1></body></html>");
        assert_eq!(resolve_title(&page, "fallback"), "Third");
    }

    #[test]
    fn blank_candidates_fall_through() {
        let page = page(
            r#"<html><head><meta name="twitter:title" content="  "><title> </title></head>
            <body><p>no headings</p></body></html>"#,
        );
        assert_eq!(resolve_title(&page, "fallback"), "fallback");
    }
}
