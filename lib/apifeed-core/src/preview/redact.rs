//! Removal of matched paths from a cloned document.

use jsonptr::{Pointer, delete::Delete};
use serde_json::Value;
use tracing::debug;

use super::matcher::match_expression;

/// Produces a copy of `document` with every location matched by `expressions`
/// removed.
///
/// The input is never mutated; all removals happen on a clone. Expressions are
/// applied in order against the current state of the clone, so earlier
/// removals affect later expressions' matches — overlapping expressions
/// compose sequentially. An expression that fails to parse, or matches
/// nothing, contributes zero removals and never aborts the pass.
///
/// The result is a pure function of `(document, expressions)`: equal inputs
/// yield deep-equal outputs, and re-running the pass on its own output is a
/// no-op.
pub fn redact(document: &Value, expressions: &[String]) -> Value {
    if expressions.is_empty() {
        return document.clone();
    }

    let mut clone = document.clone();
    for expression in expressions {
        let matches = match match_expression(&clone, expression) {
            Ok(matches) => matches,
            Err(error) => {
                debug!(%expression, %error, "ignoring unusable path expression");
                continue;
            }
        };

        // Delete in reverse document order so removing an array element cannot
        // shift the index of a match not yet deleted in the same pass.
        for found in matches.iter().rev() {
            let pointer = found.pointer();
            if let Ok(target) = Pointer::parse(&pointer) {
                // None means the target is already gone; removals are idempotent.
                let _ = clone.delete(target);
            }
        }
    }
    clone
}
