//! The saved shape of a recurring data input.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiFeedError;

/// How fetched data replaces previously ingested data at the output location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Clear the output location before writing the freshly fetched payload.
    #[default]
    Overwrite,
}

/// Configuration of one recurring data input, as handed to the management
/// collaborator on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataInputConfig {
    /// Operator-chosen display name.
    pub name: String,
    /// Kind of output this input writes to (for example `kvstore` or `index`).
    pub input_type: String,
    /// Source URL returning the JSON payload.
    pub url: String,
    /// Extra request headers, one `Name: value` line each.
    #[serde(default)]
    pub http_headers: Vec<String>,
    /// JSONPath expressions removed from the payload before ingestion.
    #[serde(default)]
    pub excluded_json_paths: Vec<String>,
    /// Whether the input is scheduled to run.
    pub enabled: bool,
    /// Replacement behavior at the output location.
    pub mode: Mode,
    /// Schedule of the recurring run.
    pub cron_expression: String,
    /// Output location as `app/collection`.
    pub selected_output_location: String,
}

impl DataInputConfig {
    /// Checks the fields the operator must fill in before saving.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFeedError::MissingField`] naming the first blank
    /// required field.
    pub fn validate(&self) -> Result<(), ApiFeedError> {
        if self.name.trim().is_empty() {
            return Err(ApiFeedError::MissingField { field: "name" });
        }
        if self.url.trim().is_empty() {
            return Err(ApiFeedError::MissingField { field: "url" });
        }
        Ok(())
    }

    /// Parses the configured `Name: value` header lines into a header map.
    ///
    /// Malformed lines are skipped; a duplicated header name keeps the last
    /// value.
    pub fn parsed_headers(&self) -> HeaderMap {
        parse_header_lines(&self.http_headers)
    }

    /// Splits the output location into `(app, collection)`.
    pub fn output_location(&self) -> Option<(&str, &str)> {
        self.selected_output_location.split_once('/')
    }
}

/// Converts `Name: value` lines into a [`HeaderMap`], skipping lines without
/// a colon or with names or values that are not valid HTTP header syntax.
pub fn parse_header_lines(lines: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            debug!(%line, "skipping header line without a colon");
            continue;
        };
        let Ok(name) = HeaderName::from_bytes(name.trim().as_bytes()) else {
            debug!(%line, "skipping header line with invalid name");
            continue;
        };
        let Ok(value) = HeaderValue::from_str(value.trim()) else {
            debug!(%line, "skipping header line with invalid value");
            continue;
        };
        headers.insert(name, value);
    }
    headers
}
