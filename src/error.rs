//! Error types for page-clip.
//!
//! Field resolution never fails; these errors only surface from the
//! asynchronous edges of the crate (document readiness, icon fetches,
//! blob read-outs) and from constructing a [`crate::Page`].

use std::time::Duration;

/// Error type for clip operations.
///
/// `Clone` because a failed icon fetch is cached and handed to every caller
/// that attached to the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page or resource URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network failure while fetching a resource.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Fetch of {url} returned HTTP {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A blob could not be converted to its textual form.
    #[error("Blob read failed: {0}")]
    BlobRead(String),

    /// The document did not report completion within the configured timeout.
    #[error("Document not ready after {0:?}")]
    NotReady(Duration),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result type alias for clip operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_parse_errors_become_invalid_url() {
        let err: Error = match url::Url::parse("not a url") {
            Ok(url) => panic!("expected a parse error, got {url}"),
            Err(e) => e.into(),
        };
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn messages_name_the_failure() {
        let err = Error::HttpStatus {
            url: "https://example.com/icon.png".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Fetch of https://example.com/icon.png returned HTTP 404");
        assert_eq!(
            Error::NotReady(Duration::from_secs(2)).to_string(),
            "Document not ready after 2s"
        );
    }
}
