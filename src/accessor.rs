//! Bounded, non-throwing node text access.
//!
//! Individual sub-elements routinely don't exist for every node shape, so
//! absence and failure both read as `None` here; callers unwrap options
//! instead of handling errors. This is the sole point of contact with the
//! driver for text reads.

use std::time::Duration;

use crate::driver::FeedDriver;

/// Trimmed text of the first sub-element of `node` matching `query`.
///
/// Returns `None` when the query matches nothing, the bounded wait
/// expires, or the underlying access fails. Never propagates a failure
/// and never blocks beyond `timeout`.
pub fn safe_text<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    query: &str,
    timeout: Duration,
) -> Option<String> {
    match driver.node_text(node, query, timeout) {
        Ok(text) => text.map(|t| t.trim().to_string()),
        Err(err) => {
            tracing::trace!(query, %err, "text read failed");
            None
        }
    }
}
