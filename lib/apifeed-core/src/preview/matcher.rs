//! JSONPath matching against a raw preview document.
//!
//! Expressions use RFC 9535 JSONPath via [`serde_json_path`], which covers the
//! four primitives operators rely on: member access (`$.a.b`), wildcards
//! (`$.items[*]`), recursive descent (`$..id`), and numeric array indexing
//! (`$.items[0]`).

use serde_json::Value;
use serde_json_path::JsonPath;

use crate::error::ApiFeedError;

/// A matched location inside a document: the parent container plus the key
/// (object member name or array index, as an RFC 6901 token) to remove from it.
///
/// A match is a snapshot of the document at query time. It becomes stale when
/// an earlier removal already deleted its parent or key; deletion of a stale
/// match is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    parent: String,
    key: String,
}

impl PathMatch {
    /// Splits a JSON Pointer into `(parent, key)`.
    ///
    /// Returns `None` for the root pointer: the document root has no parent
    /// and cannot be deleted.
    fn from_pointer(pointer: &str) -> Option<Self> {
        let (parent, key) = pointer.rsplit_once('/')?;
        Some(Self {
            parent: parent.to_string(),
            key: key.to_string(),
        })
    }

    /// JSON Pointer of the parent container (`""` for a top-level key).
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// RFC 6901 token of the matched key within its parent.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Full JSON Pointer of the matched location.
    pub fn pointer(&self) -> String {
        format!("{}/{}", self.parent, self.key)
    }
}

/// Finds every location in `document` matching the JSONPath `expression`.
///
/// Matches are evaluated against the state of `document` at call time and are
/// returned in document order. Matches resolving to the document root are
/// excluded.
///
/// # Errors
///
/// Returns [`ApiFeedError::InvalidPathExpression`] if the expression is not
/// valid JSONPath. Callers in the redaction pass treat this as zero matches.
pub fn match_expression(
    document: &Value,
    expression: &str,
) -> Result<Vec<PathMatch>, ApiFeedError> {
    let path =
        JsonPath::parse(expression).map_err(|error| ApiFeedError::InvalidPathExpression {
            expression: expression.to_string(),
            message: error.to_string(),
        })?;

    let matches = path
        .query_located(document)
        .locations()
        .filter_map(|location| PathMatch::from_pointer(&location.to_json_pointer()))
        .collect();
    Ok(matches)
}
