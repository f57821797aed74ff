//! Session-scoped cache of the raw document and its filtered view.

use serde_json::Value;
use tracing::debug;

use super::redact::redact;

/// Holds the last successfully fetched document, the operator's excluded
/// paths, and the derived filtered view.
///
/// The cache is either `Empty` (no raw document) or `Loaded`. Changing the
/// excluded paths while loaded recomputes the filtered view from the cached
/// raw document without any network access.
///
/// Invariant: whenever a raw document is present, the filtered view is the
/// result of applying the current excluded paths to it — the two never go
/// stale relative to each other.
#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    raw: Option<Value>,
    excluded_paths: Vec<String>,
    filtered: Option<Value>,
    last_error: Option<String>,
}

impl PreviewCache {
    /// Creates an empty cache with no excluded paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly fetched document and recomputes the filtered view.
    ///
    /// Replaces any previously cached document wholesale and clears a
    /// previously surfaced fetch error.
    pub fn on_fetch_success(&mut self, document: Value) {
        self.raw = Some(document);
        self.last_error = None;
        self.recompute();
    }

    /// Records a failed fetch: the cache returns to `Empty` and the error
    /// message is kept for display.
    pub fn on_fetch_failure(&mut self, message: String) {
        debug!(%message, "preview fetch failed");
        self.raw = None;
        self.filtered = None;
        self.last_error = Some(message);
    }

    /// Replaces the excluded path set.
    ///
    /// With a cached raw document this recomputes the filtered view in place;
    /// without one it only stores the paths for the next fetch.
    pub fn set_excluded_paths(&mut self, paths: Vec<String>) {
        self.excluded_paths = paths;
        if self.raw.is_some() {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.filtered = self
            .raw
            .as_ref()
            .map(|raw| redact(raw, &self.excluded_paths));
    }

    /// The unmodified payload as retrieved from the source, if loaded.
    pub fn raw_document(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    /// The derived document with all excluded paths removed, if loaded.
    pub fn filtered_view(&self) -> Option<&Value> {
        self.filtered.as_ref()
    }

    /// The currently active excluded path expressions.
    pub fn excluded_paths(&self) -> &[String] {
        &self.excluded_paths
    }

    /// The message of the most recent fetch failure, cleared on the next
    /// successful fetch.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a raw document is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.raw.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_start_empty() {
        let cache = PreviewCache::new();
        assert!(!cache.is_loaded());
        assert!(cache.raw_document().is_none());
        assert!(cache.filtered_view().is_none());
        assert!(cache.last_error().is_none());
    }

    #[test]
    fn should_recompute_filtered_view_on_fetch_success() {
        let mut cache = PreviewCache::new();
        cache.set_excluded_paths(vec!["$.secret".to_string()]);
        cache.on_fetch_success(json!({"secret": "x", "public": 1}));

        assert!(cache.is_loaded());
        assert_eq!(cache.filtered_view(), Some(&json!({"public": 1})));
        assert_eq!(cache.raw_document(), Some(&json!({"secret": "x", "public": 1})));
    }

    #[test]
    fn should_recompute_on_path_change_without_new_document() {
        let mut cache = PreviewCache::new();
        cache.on_fetch_success(json!({"a": 1, "b": 2}));
        assert_eq!(cache.filtered_view(), Some(&json!({"a": 1, "b": 2})));

        cache.set_excluded_paths(vec!["$.a".to_string()]);
        assert_eq!(cache.filtered_view(), Some(&json!({"b": 2})));
        // The raw document is untouched.
        assert_eq!(cache.raw_document(), Some(&json!({"a": 1, "b": 2})));
    }

    #[test]
    fn should_ignore_path_change_while_empty() {
        let mut cache = PreviewCache::new();
        cache.set_excluded_paths(vec!["$.a".to_string()]);
        assert!(cache.filtered_view().is_none());
        assert_eq!(cache.excluded_paths(), ["$.a".to_string()]);
    }

    #[test]
    fn should_reset_to_empty_on_fetch_failure() {
        let mut cache = PreviewCache::new();
        cache.on_fetch_success(json!({"a": 1}));
        cache.on_fetch_failure("HTTP error: 500 Internal Server Error".to_string());

        assert!(!cache.is_loaded());
        assert!(cache.raw_document().is_none());
        assert!(cache.filtered_view().is_none());
        let message = cache.last_error().expect("error should be surfaced");
        assert!(message.contains("500"));
    }

    #[test]
    fn should_clear_surfaced_error_on_next_success() {
        let mut cache = PreviewCache::new();
        cache.on_fetch_failure("HTTP error: 404 Not Found".to_string());
        cache.on_fetch_success(json!({}));
        assert!(cache.last_error().is_none());
    }

    #[test]
    fn should_replace_document_wholesale_on_refetch() {
        let mut cache = PreviewCache::new();
        cache.set_excluded_paths(vec!["$.a".to_string()]);
        cache.on_fetch_success(json!({"a": 1, "b": 2}));
        cache.on_fetch_success(json!({"a": 9, "c": 3}));

        assert_eq!(cache.raw_document(), Some(&json!({"a": 9, "c": 3})));
        assert_eq!(cache.filtered_view(), Some(&json!({"c": 3})));
    }
}
