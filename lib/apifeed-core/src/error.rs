use http::StatusCode;

/// Errors that can occur while configuring or previewing a data input.
///
/// This enum covers all error conditions from network issues to operator input
/// validation. All variants implement `std::error::Error` and render a single
/// human-readable message suitable for surfacing in the UI.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiFeedError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error for the operator-supplied source URL.
    UrlError(url::ParseError),

    /// A required field is missing or blank.
    ///
    /// Occurs when the operator submits a form without a URL, a name, or
    /// another mandatory value.
    #[display("Missing required field: {field}")]
    #[from(skip)]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The source responded with a non-success HTTP status.
    #[display("HTTP error: {status}")]
    #[from(skip)]
    HttpStatus {
        /// The status code returned by the source.
        status: StatusCode,
    },

    /// The response body is not valid JSON.
    #[display("Invalid JSON body: {error}")]
    #[from(skip)]
    InvalidJsonBody {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// A path expression could not be parsed as JSONPath.
    ///
    /// The redaction pass recovers from this locally: the expression
    /// contributes zero matches and the rest of the preview is unaffected.
    #[display("Invalid path expression '{expression}': {message}")]
    #[from(skip)]
    InvalidPathExpression {
        /// The offending expression as entered by the operator.
        expression: String,
        /// Description of the syntax error.
        message: String,
    },

    /// The management collaborator rejected a create or save operation.
    #[display("Configuration rejected: {message}")]
    #[from(skip)]
    ConfigRejected {
        /// Description of the rejection.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_status_code_in_http_error_message() {
        let error = ApiFeedError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn should_render_missing_field_name() {
        let error = ApiFeedError::MissingField { field: "url" };
        assert_eq!(error.to_string(), "Missing required field: url");
    }

    #[test]
    fn should_render_offending_expression() {
        let error = ApiFeedError::InvalidPathExpression {
            expression: "$[invalid".to_string(),
            message: "unexpected end of input".to_string(),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("$[invalid"));
        assert!(rendered.contains("unexpected end of input"));
    }
}
