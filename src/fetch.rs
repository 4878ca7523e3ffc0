//! Resource fetching and blob read-outs for icons.
//!
//! The [`Fetcher`] trait is the seam between icon resolution and the network.
//! [`HttpFetcher`] (feature `http`) implements it over `reqwest`; tests and
//! embedders can supply their own.

use std::collections::HashMap;
#[cfg(feature = "http")]
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use base64::Engine as _;
use bytes::Bytes;

use crate::error::{Error, Result};

/// Fetched bytes plus their media type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    /// Raw content.
    pub bytes: Bytes,
    /// Media type, e.g. `image/png`. Empty when unknown.
    pub mime: String,
}

impl Blob {
    /// A blob from raw bytes and a media type.
    #[must_use]
    pub fn new(bytes: impl Into<Bytes>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// How a fetch may use cached responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Normal HTTP caching rules.
    Default,
    /// Use any cached response regardless of freshness; go to the network
    /// only on a miss.
    #[default]
    ForceCache,
    /// Always go to the network.
    NoStore,
}

/// What to do with redirects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedirectMode {
    /// Follow them.
    #[default]
    Follow,
    /// Treat a redirect as an error.
    Error,
}

/// Per-request fetch options.
///
/// The default (force-cache, follow redirects) is what icon fetches use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Cache policy.
    pub cache: CacheMode,
    /// Redirect policy.
    pub redirect: RedirectMode,
}

/// Fetches a URL into a [`Blob`].
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` honoring `options`.
    async fn fetch(&self, url: &str, options: FetchOptions) -> Result<Blob>;
}

/// Least-recently-used map of fetched responses, capped at `capacity`.
#[cfg(feature = "http")]
#[derive(Debug)]
struct ResponseCache {
    capacity: usize,
    entries: HashMap<String, Blob>,
    order: VecDeque<String>,
}

#[cfg(feature = "http")]
impl ResponseCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&mut self, url: &str) -> Option<Blob> {
        let blob = self.entries.get(url).cloned()?;
        self.touch(url);
        Some(blob)
    }

    fn insert(&mut self, url: &str, blob: Blob) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(url.to_string(), blob).is_some() {
            self.touch(url);
            return;
        }
        self.order.push_back(url.to_string());
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, url: &str) {
        if let Some(pos) = self.order.iter().position(|u| u == url) {
            if let Some(key) = self.order.remove(pos) {
                self.order.push_back(key);
            }
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Fetcher over `reqwest` with an in-process response cache.
///
/// The cache keeps the [`HttpFetcher::DEFAULT_CACHE_CAPACITY`] most recently
/// used responses unless [`HttpFetcher::with_cache_capacity`] says otherwise.
#[cfg(feature = "http")]
pub struct HttpFetcher {
    follow: reqwest::Client,
    manual: reqwest::Client,
    cache: Mutex<ResponseCache>,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    /// Maximum number of redirects followed.
    pub const MAX_REDIRECTS: usize = 5;

    /// Responses kept by default.
    pub const DEFAULT_CACHE_CAPACITY: usize = 256;

    /// A fetcher with the default user agent.
    pub fn new() -> Result<Self> {
        Self::with_user_agent(concat!("page-clip/", env!("CARGO_PKG_VERSION")))
    }

    /// A fetcher sending `user_agent`.
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let build = |policy| {
            reqwest::Client::builder()
                .user_agent(user_agent)
                .redirect(policy)
                .use_rustls_tls()
                .gzip(true)
                .build()
                .map_err(|e| Error::Fetch(format!("failed to build HTTP client: {e}")))
        };

        Ok(Self {
            follow: build(reqwest::redirect::Policy::limited(Self::MAX_REDIRECTS))?,
            manual: build(reqwest::redirect::Policy::none())?,
            cache: Mutex::new(ResponseCache::new(Self::DEFAULT_CACHE_CAPACITY)),
        })
    }

    /// Keep at most `capacity` responses. Zero disables caching.
    #[must_use]
    pub fn with_cache_capacity(self, capacity: usize) -> Self {
        Self {
            cache: Mutex::new(ResponseCache::new(capacity)),
            ..self
        }
    }

    fn cached(&self, url: &str) -> Option<Blob> {
        self.cache.lock().ok()?.get(url)
    }

    fn store(&self, url: &str, blob: &Blob) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url, blob.clone());
        }
    }
}

#[cfg(feature = "http")]
impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

#[cfg(feature = "http")]
#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, options: FetchOptions) -> Result<Blob> {
        if options.cache == CacheMode::ForceCache {
            if let Some(blob) = self.cached(url) {
                tracing::trace!(url, "fetch served from cache");
                return Ok(blob);
            }
        }

        let client = match options.redirect {
            RedirectMode::Follow => &self.follow,
            RedirectMode::Error => &self.manual,
        };

        tracing::debug!(url, "fetching");
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("network error: {e}")))?;

        check_status(url, response.status(), options.redirect)?;

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_default();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("failed to read body: {e}")))?;

        let blob = Blob { bytes, mime };
        if options.cache != CacheMode::NoStore {
            self.store(url, &blob);
        }
        Ok(blob)
    }
}

/// Map a response status to an error. A 3xx still present after the client's
/// redirect policy ran is only a refused redirect under [`RedirectMode::Error`].
#[cfg(feature = "http")]
fn check_status(url: &str, status: reqwest::StatusCode, redirect: RedirectMode) -> Result<()> {
    if status.is_redirection() && redirect == RedirectMode::Error {
        return Err(Error::Fetch(format!("redirect refused for {url}")));
    }
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Converts a blob to its textual read-out.
#[async_trait::async_trait]
pub trait BlobReader: Send + Sync {
    /// Read `blob` as a `data:` URL.
    async fn read_as_data_url(&self, blob: &Blob) -> Result<String>;
}

/// Encodes blobs as base64 `data:` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlReader;

#[async_trait::async_trait]
impl BlobReader for DataUrlReader {
    async fn read_as_data_url(&self, blob: &Blob) -> Result<String> {
        let mime = if blob.mime.is_empty() {
            "application/octet-stream"
        } else {
            blob.mime.as_str()
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(&blob.bytes);
        Ok(format!("data:{mime};base64,{encoded}"))
    }
}

/// Registry of in-memory object URLs (`blob:<origin>/<id>`).
#[derive(Debug)]
pub struct BlobUrlStore {
    origin: String,
    next: AtomicU64,
    blobs: Mutex<HashMap<String, Blob>>,
}

impl BlobUrlStore {
    /// A store minting URLs under `origin`, e.g. `https://example.com`.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            next: AtomicU64::new(1),
            blobs: Mutex::new(HashMap::new()),
        }
    }

    /// Register `blob` and return a fresh URL for it.
    pub fn create_object_url(&self, blob: Blob) -> Result<String> {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        let url = format!("blob:{}/{id}", self.origin);
        self.blobs
            .lock()
            .map_err(|_| Error::BlobRead("blob store poisoned".to_string()))?
            .insert(url.clone(), blob);
        Ok(url)
    }

    /// The blob behind `url`, if still registered.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<Blob> {
        self.blobs.lock().ok()?.get(url).cloned()
    }

    /// Forget `url`. Returns whether it was registered.
    pub fn revoke(&self, url: &str) -> bool {
        self.blobs
            .lock()
            .map(|mut blobs| blobs.remove(url).is_some())
            .unwrap_or(false)
    }
}
