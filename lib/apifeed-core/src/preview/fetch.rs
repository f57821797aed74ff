//! One-shot retrieval of the preview document over HTTP.

use http::HeaderMap;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ApiFeedError;

/// Source of preview documents.
///
/// The production implementation is [`HttpSource`]; tests substitute an
/// in-memory source to exercise the preview pipeline without a network.
pub trait DocumentSource {
    /// Retrieves and parses the JSON document at `url`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiFeedError::MissingField`] for a blank URL, with
    /// [`ApiFeedError::HttpStatus`] for a non-success response, and with
    /// [`ApiFeedError::InvalidJsonBody`] when the body is not valid JSON.
    async fn fetch_document(&self, url: &str) -> Result<Value, ApiFeedError>;
}

/// Fetches preview documents with reqwest, optionally sending the extra
/// request headers configured on the data input.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
    headers: HeaderMap,
}

impl HttpSource {
    /// Creates a source with no extra request headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source sending `headers` with every request.
    ///
    /// Use [`DataInputConfig::parsed_headers`](crate::DataInputConfig::parsed_headers)
    /// to build the map from the operator's `Name: value` header lines.
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            client: reqwest::Client::new(),
            headers,
        }
    }
}

impl DocumentSource for HttpSource {
    async fn fetch_document(&self, url: &str) -> Result<Value, ApiFeedError> {
        if url.trim().is_empty() {
            return Err(ApiFeedError::MissingField { field: "url" });
        }
        let url = Url::parse(url)?;

        debug!(%url, "fetching preview document");
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiFeedError::HttpStatus { status });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "preview document received");
        serde_json::from_str(&body).map_err(|error| ApiFeedError::InvalidJsonBody { error, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_reject_empty_url_without_network() {
        let source = HttpSource::new();
        let result = source.fetch_document("").await;
        assert!(matches!(
            result,
            Err(ApiFeedError::MissingField { field: "url" })
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_url_without_network() {
        let source = HttpSource::new();
        let result = source.fetch_document("   ").await;
        assert!(matches!(result, Err(ApiFeedError::MissingField { .. })));
    }

    #[tokio::test]
    async fn should_reject_malformed_url_without_network() {
        let source = HttpSource::new();
        let result = source.fetch_document("not a url").await;
        assert!(matches!(result, Err(ApiFeedError::UrlError(_))));
    }
}
