//! Record and report types for feed scanning.

use serde::{Deserialize, Serialize};

use crate::traversal::FeedPhase;

/// One flat record extracted from a single content node.
///
/// Field declaration order is the persisted column order. Every field
/// defaults to the empty string when unresolved; the persisted form never
/// contains an absent value. Records are created once per node during a
/// single traversal pass and never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Actor name for the item.
    pub name: String,

    /// First email-shaped substring of the body.
    pub email: String,

    /// First phone-shaped substring of the body, digits and a leading `+`.
    pub phone_number: String,

    /// First gazetteer entry appearing in the body, canonical casing.
    pub location: String,

    /// Permalink target for the item.
    pub url: String,

    /// Cleaned body text.
    pub text: String,
}

/// Result of one feed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Successfully extracted records, in snapshot document order.
    pub records: Vec<ExtractedRecord>,

    /// Content nodes observed in the final snapshot, including skipped ones.
    pub nodes_seen: usize,

    /// Terminal phase of the traversal controller.
    pub phase: FeedPhase,

    /// Per-node skip messages and other non-fatal notes gathered during
    /// the scan.
    pub warnings: Vec<String>,
}

impl ScanReport {
    /// Nodes observed but skipped because of an unrecovered per-node
    /// failure.
    #[must_use]
    pub fn nodes_skipped(&self) -> usize {
        self.nodes_seen.saturating_sub(self.records.len())
    }
}
