//! # apifeed-core
//!
//! Configure a recurring JSON data input: point it at a URL, preview the
//! payload, and redact fields with JSONPath expressions before saving.
//!
//! The heart of the crate is the preview pipeline:
//!
//! - **[`PreviewSession`]** - fetches the document once and owns the session state
//! - **[`PreviewCache`]** - keeps the raw document and re-derives the filtered
//!   view whenever the excluded paths change, without re-fetching
//! - **[`redact`]** - removes every location matched by a set of JSONPath
//!   expressions from a cloned document
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apifeed_core::{HttpSource, PreviewSession};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut session = PreviewSession::new(HttpSource::new());
//!
//! // One network call fetches the raw document and computes the preview.
//! session.fetch_preview("https://api.example.com/orders").await;
//!
//! // Editing the excluded paths recomputes the preview from the cache.
//! session.set_excluded_paths(vec!["$..credit_card".to_string()]);
//! if let Some(view) = session.cache().filtered_view() {
//!     println!("{view:#}");
//! }
//! # }
//! ```
//!
//! ## Path expressions
//!
//! Expressions are RFC 9535 JSONPath. Member access (`$.user.email`),
//! wildcards (`$.items[*].id`), recursive descent (`$..password`), and array
//! indices (`$.items[0]`) are all supported. An expression that fails to
//! parse, or matches nothing, is ignored: malformed operator input never
//! breaks the preview.
//!
//! ## Saving the input
//!
//! Once the preview looks right, build a [`DataInputConfig`] and hand it to
//! the host platform through the [`ManagementApi`] collaborator trait with
//! [`save_data_input`].

mod config;
pub use self::config::{DataInputConfig, Mode, parse_header_lines};

mod error;
pub use self::error::ApiFeedError;

mod management;
pub use self::management::{ManagementApi, create_index, save_data_input};

mod preview;
pub use self::preview::{
    DocumentSource, HttpSource, PathMatch, PreviewCache, PreviewSession, RequestId,
    match_expression, redact,
};
