//! # feedsift
//!
//! Structured record extraction from progressively loaded content feeds.
//!
//! `feedsift` scans a feed of semi-structured content nodes rendered by an
//! external document-automation driver and turns each node into one flat
//! record: actor name, contact fields parsed from the body text, a
//! location tag, a permalink, and the cleaned body. Records are persisted
//! as fixed-schema CSV.
//!
//! The crate is built around three ideas:
//!
//! - **Fallback-chain field resolution**: feed markup is heterogeneous
//!   (native posts, reposts, sponsored items), so every logical field is
//!   resolved through an ordered list of structural queries, most
//!   distinctive first, first usable result wins.
//! - **Absence over errors**: individual sub-elements routinely don't
//!   exist for a given node shape; all driver reads are bounded and
//!   non-throwing, and a field that cannot be resolved becomes an empty
//!   string, never a failure.
//! - **Per-node isolation**: one malformed node is logged and skipped; it
//!   can never abort the batch.
//!
//! The driver side of the seam is the [`FeedDriver`] trait. A built-in
//! implementation, [`SnapshotFeed`], serves saved HTML pages for offline
//! runs and tests; live automation sessions plug in the same way.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use feedsift::{scan, Options, SnapshotFeed};
//!
//! let html = r#"<div role="article">
//!   <span class="feed-shared-actor__name">Asha Rao</span>
//!   <span class="break-words">Reach me at asha@example.in, Hyderabad.</span>
//!   <a href="/posts/update-1">permalink</a>
//! </div>"#;
//!
//! let mut feed = SnapshotFeed::from_html(html);
//! // A snapshot is already fully loaded; skip the live-feed waits.
//! let options = Options {
//!     render_grace: Duration::ZERO,
//!     settle_delay: Duration::ZERO,
//!     ..Options::default()
//! };
//!
//! let report = scan(&mut feed, &options);
//! assert_eq!(report.records[0].name, "Asha Rao");
//! assert_eq!(report.records[0].email, "asha@example.in");
//! assert_eq!(report.records[0].location, "Hyderabad");
//! ```

mod builder;
mod error;
mod options;
mod result;
mod scan;
mod sink;

/// Bounded, non-throwing node text access.
pub mod accessor;

/// Heuristic contact and location extractors.
pub mod attributes;

/// The external document-automation driver contract.
pub mod driver;

/// Body text normalization.
pub mod normalize;

/// Compiled patterns, query chains, and fixed vocabularies.
pub mod patterns;

/// Per-field fallback-chain resolution.
pub mod resolver;

/// Snapshot-backed offline driver.
pub mod snapshot;

/// Bounded settle-detecting feed traversal.
pub mod traversal;

// Public API - re-exports
pub use driver::{DriverError, DriverResult, FeedDriver};
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractedRecord, ScanReport};
pub use snapshot::SnapshotFeed;
pub use traversal::FeedPhase;

/// Scans the feed to exhaustion and returns the extracted records.
///
/// Runs the traversal controller until the feed settles or hits the
/// iteration cap, then builds one record per content node in snapshot
/// order. Never fails: every driver failure is recovered as an absent
/// field, a skipped node, or an empty report.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use feedsift::{scan, Options, SnapshotFeed};
///
/// let mut feed = SnapshotFeed::from_html("<p>no content nodes here</p>");
/// let options = Options {
///     render_grace: Duration::ZERO,
///     settle_delay: Duration::ZERO,
///     ..Options::default()
/// };
/// let report = scan(&mut feed, &options);
/// assert_eq!(report.nodes_seen, 0);
/// ```
pub fn scan<D: FeedDriver>(driver: &mut D, options: &Options) -> ScanReport {
    scan::scan_feed(driver, options)
}

/// Scans the feed and persists the result.
///
/// Writes the records to `records_path` as CSV with a fixed header of
/// `name,email,phone_number,location,url,text`. When the snapshot holds no
/// content nodes at all, the raw document is dumped to `diagnostic_path`
/// instead and no tabular file is produced, distinguishing "nothing to
/// scan" from "scanned but extracted nothing".
///
/// A sink failure is the only error the pipeline surfaces.
#[allow(clippy::missing_errors_doc)]
pub fn scan_to_csv<D: FeedDriver>(
    driver: &mut D,
    options: &Options,
    records_path: &std::path::Path,
    diagnostic_path: &std::path::Path,
) -> Result<ScanReport> {
    scan::scan_feed_to_csv(driver, options, records_path, diagnostic_path)
}
