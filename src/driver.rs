//! The external document-automation driver seam.
//!
//! The extraction pipeline never touches a browser or document tree
//! directly; it goes through [`FeedDriver`], which models the external
//! collaborator that renders the feed. Implementations decide what a query
//! string means: CSS selectors for the built-in snapshot driver, locator
//! expressions for a live automation session.

use std::time::Duration;

/// Opaque failure reported by a driver operation.
///
/// The pipeline treats every driver failure as "this field/node/step is
/// unavailable"; the message is only ever logged, never matched on.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct DriverError(String);

impl DriverError {
    /// Creates a driver error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type alias for driver operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Contract for the external collaborator that renders a content feed.
///
/// All operations are synchronous and bounded: a conforming implementation
/// returns within the supplied timeout (or its own internal bound) rather
/// than blocking indefinitely. The pipeline performs no retries; a failed
/// operation is final for the field, node, or traversal step it served.
pub trait FeedDriver {
    /// Opaque handle to one feed item. Owned by the driver; the pipeline
    /// only ever passes it back into driver calls, never mutates it.
    type Node;

    /// Handles to every content node currently loaded, in document order.
    fn content_nodes(&self) -> DriverResult<Vec<Self::Node>>;

    /// Text of the first sub-element of `node` matching `query`, or `None`
    /// when nothing matches within the bounded wait.
    fn node_text(
        &self,
        node: &Self::Node,
        query: &str,
        timeout: Duration,
    ) -> DriverResult<Option<String>>;

    /// Number of expand/see-more controls under `node` matching `query`.
    fn expand_controls(&self, node: &Self::Node, query: &str) -> DriverResult<usize>;

    /// Best-effort click on the `index`-th expand control under `node`.
    fn click_expand(
        &self,
        node: &Self::Node,
        query: &str,
        index: usize,
        timeout: Duration,
    ) -> DriverResult<()>;

    /// Targets of all link sub-elements under `node`, in document order.
    /// Links without a target are omitted.
    fn link_targets(&self, node: &Self::Node) -> DriverResult<Vec<String>>;

    /// Monotonic size measure of the loaded feed: scroll height, node
    /// count, byte length, anything that grows as content loads.
    fn content_extent(&self) -> DriverResult<u64>;

    /// Asks the driver to load more content (scroll to end or equivalent).
    fn request_more(&mut self) -> DriverResult<()>;

    /// Raw dump of the full document, for diagnostics.
    fn raw_document(&self) -> DriverResult<String>;
}
