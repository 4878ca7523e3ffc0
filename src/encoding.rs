//! Charset sniffing for byte input.
//!
//! A page handed over as raw bytes is decoded with the first encoding found
//! among: a byte-order mark, the `charset` parameter of the transport
//! `Content-Type`, a `<meta>` declaration in the first kilobyte. UTF-8
//! otherwise. Undecodable bytes become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_PARAM, META_CHARSET};

/// Bytes scanned for a `<meta>` charset declaration.
const PRESCAN_LIMIT: usize = 1024;

/// Pick the encoding for `html`.
///
/// `content_type` is the transport header value, e.g.
/// `text/html; charset=iso-8859-1`, when one is known.
#[must_use]
pub fn sniff(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let from_header = content_type
        .and_then(|ct| CHARSET_PARAM.captures(ct))
        .and_then(|c| Encoding::for_label(c[1].as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(PRESCAN_LIMIT)]);
    META_CHARSET
        .captures_iter(&head)
        .find_map(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `html` to a UTF-8 string.
#[must_use]
pub fn decode(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = sniff(html, content_type);
    let (text, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced undecodable bytes");
    }
    text.into_owned()
}
