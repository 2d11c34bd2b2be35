//! Snapshot-backed feed driver.
//!
//! Wraps a static HTML document in the [`FeedDriver`] contract so saved
//! feed pages can be scanned offline and the pipeline exercised without a
//! live automation session. Queries are CSS selectors scoped to the node
//! subtree. The document never grows, so traversal settles after a single
//! step; expand controls are located to honor the contract but clicking
//! them is a successful no-op, a static snapshot having nothing left to
//! reveal.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;
use std::time::Duration;

use dom_query::{Document, Selection};
use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::driver::{DriverError, DriverResult, FeedDriver};
use crate::patterns::CONTENT_NODE_QUERY;

/// Charset declaration in a `<meta>` tag, either flavor.
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// A parsed, immutable feed snapshot.
pub struct SnapshotFeed {
    document: Document,
    html: String,
}

impl SnapshotFeed {
    /// Parses a snapshot from an HTML string.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        let html = html.into();
        let document = Document::from(html.as_str());
        Self { document, html }
    }

    /// Parses a snapshot from raw bytes, transcoding to UTF-8 first.
    ///
    /// The charset is taken from the document's own meta declaration when
    /// one appears in the first 1024 bytes, defaulting to UTF-8. Invalid
    /// characters become U+FFFD rather than failing.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_html(transcode_to_utf8(bytes))
    }

    fn node_selection(&self, index: usize) -> DriverResult<Selection<'_>> {
        let nodes = self.document.select(CONTENT_NODE_QUERY);
        nodes
            .nodes()
            .get(index)
            .copied()
            .map(Selection::from)
            .ok_or_else(|| DriverError::new(format!("content node {index} out of range")))
    }
}

impl FeedDriver for SnapshotFeed {
    type Node = usize;

    fn content_nodes(&self) -> DriverResult<Vec<usize>> {
        Ok((0..self.document.select(CONTENT_NODE_QUERY).nodes().len()).collect())
    }

    fn node_text(
        &self,
        node: &usize,
        query: &str,
        _timeout: Duration,
    ) -> DriverResult<Option<String>> {
        let scope = self.node_selection(*node)?;
        let matches = scope.select(query);
        Ok(matches
            .nodes()
            .first()
            .map(|first| Selection::from(*first).text().trim().to_string()))
    }

    fn expand_controls(&self, node: &usize, query: &str) -> DriverResult<usize> {
        Ok(self.node_selection(*node)?.select(query).nodes().len())
    }

    fn click_expand(
        &self,
        node: &usize,
        query: &str,
        index: usize,
        _timeout: Duration,
    ) -> DriverResult<()> {
        let controls = self.node_selection(*node)?.select(query).nodes().len();
        if index < controls {
            Ok(())
        } else {
            Err(DriverError::new(format!("expand control {index} out of range")))
        }
    }

    fn link_targets(&self, node: &usize) -> DriverResult<Vec<String>> {
        let scope = self.node_selection(*node)?;
        Ok(scope
            .select("a")
            .nodes()
            .iter()
            .filter_map(|anchor| Selection::from(*anchor).attr("href"))
            .map(|href| href.trim().to_string())
            .collect())
    }

    fn content_extent(&self) -> DriverResult<u64> {
        Ok(u64::try_from(self.html.len()).unwrap_or(u64::MAX))
    }

    fn request_more(&mut self) -> DriverResult<()> {
        Ok(())
    }

    fn raw_document(&self) -> DriverResult<String> {
        Ok(self.html.clone())
    }
}

/// Transcodes raw page bytes to a UTF-8 string using the document's own
/// charset declaration, with lossy conversion for invalid sequences.
fn transcode_to_utf8(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    let encoding = CHARSET_DECLARATION
        .captures(&head_str)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
