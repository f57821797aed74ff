//! The preview pipeline: fetch once, redact, recompute on path changes.
//!
//! A [`PreviewSession`] owns the cached raw document and its filtered view
//! for one configuration session. The document is retrieved once through a
//! [`DocumentSource`]; editing the excluded paths re-derives the filtered
//! view from the cached document without touching the network.
//!
//! Fetches are guarded by a monotonically increasing request id: when several
//! fetches overlap, only the most recently issued one may update the cache,
//! so a slow stale response can never overwrite a newer result.

use serde_json::Value;
use tracing::debug;

mod cache;
pub use self::cache::PreviewCache;

mod fetch;
pub use self::fetch::{DocumentSource, HttpSource};

mod matcher;
pub use self::matcher::{PathMatch, match_expression};

mod redact;
pub use self::redact::redact;

use crate::error::ApiFeedError;


/// Identifies one issued fetch within a session.
///
/// Ids are strictly increasing; only the newest one is accepted at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Drives the preview for a single data-input configuration session.
#[derive(Debug, Clone)]
pub struct PreviewSession<S> {
    source: S,
    cache: PreviewCache,
    newest_request: u64,
}

impl<S> PreviewSession<S> {
    /// Creates a session fetching documents from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: PreviewCache::new(),
            newest_request: 0,
        }
    }

    /// Read access to the cached raw document, filtered view, and last error.
    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    /// Replaces the excluded path set and recomputes the filtered view from
    /// the cached raw document. Never performs a network call.
    pub fn set_excluded_paths(&mut self, paths: Vec<String>) {
        self.cache.set_excluded_paths(paths);
    }

    /// Issues a new request id, superseding all previously issued ones.
    pub fn begin_request(&mut self) -> RequestId {
        self.newest_request += 1;
        RequestId(self.newest_request)
    }

    /// Applies the outcome of the fetch identified by `id`.
    ///
    /// Returns `false` when a newer request was issued in the meantime; the
    /// stale outcome is discarded and the cache is left untouched. Otherwise
    /// the cache moves to `Loaded` on success or `Empty` on failure, with the
    /// error message surfaced via [`PreviewCache::last_error`].
    pub fn complete_request(
        &mut self,
        id: RequestId,
        outcome: Result<Value, ApiFeedError>,
    ) -> bool {
        if id.0 != self.newest_request {
            debug!(
                stale = id.0,
                newest = self.newest_request,
                "discarding stale fetch response"
            );
            return false;
        }
        match outcome {
            Ok(document) => self.cache.on_fetch_success(document),
            Err(error) => self.cache.on_fetch_failure(error.to_string()),
        }
        true
    }
}

impl<S: DocumentSource> PreviewSession<S> {
    /// Fetches `url` and updates the cache with the result.
    ///
    /// Returns `false` when the response was superseded by a newer fetch and
    /// therefore discarded.
    pub async fn fetch_preview(&mut self, url: &str) -> bool {
        let id = self.begin_request();
        let outcome = self.source.fetch_document(url).await;
        self.complete_request(id, outcome)
    }
}
