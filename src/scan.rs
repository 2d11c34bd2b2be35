//! Scan orchestration.
//!
//! Runs the traversal controller to exhaustion, snapshots the loaded
//! content nodes, builds one record per node, and optionally persists the
//! result. Extraction itself is infallible (every driver failure is
//! recovered as absence or a skipped node), so only persistence can fail.

use std::path::Path;
use std::thread;

use crate::builder;
use crate::driver::FeedDriver;
use crate::error::Result;
use crate::options::Options;
use crate::result::ScanReport;
use crate::sink;
use crate::traversal;

/// Scans the feed and returns the extracted records.
///
/// Never fails: a driver that cannot even enumerate content nodes yields
/// an empty report. Callers distinguish "nothing to scan" from "scanned
/// but extracted nothing" via `ScanReport::nodes_seen`.
pub fn scan_feed<D: FeedDriver>(driver: &mut D, options: &Options) -> ScanReport {
    // Give a live feed a moment to finish rendering before measuring.
    if !options.render_grace.is_zero() {
        thread::sleep(options.render_grace);
    }

    let phase = traversal::run_to_exhaustion(driver, options);

    let mut warnings = Vec::new();
    let nodes = match driver.content_nodes() {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::warn!(%err, "content node enumeration failed");
            warnings.push(format!("content node enumeration failed: {err}"));
            Vec::new()
        }
    };
    let nodes_seen = nodes.len();
    tracing::info!(nodes_seen, ?phase, "snapshot ready");

    let records = builder::build_records(driver, &nodes, options, &mut warnings);
    tracing::info!(
        records = records.len(),
        skipped = nodes_seen - records.len(),
        "extraction complete"
    );

    ScanReport {
        records,
        nodes_seen,
        phase,
        warnings,
    }
}

/// Scans the feed and persists the result.
///
/// When the snapshot contains no content nodes at all, the raw document is
/// dumped to `diagnostic_path` and no tabular file is produced. Otherwise
/// the records go to `records_path` as CSV with the header always present.
/// A sink failure is the only error this pipeline surfaces.
pub fn scan_feed_to_csv<D: FeedDriver>(
    driver: &mut D,
    options: &Options,
    records_path: &Path,
    diagnostic_path: &Path,
) -> Result<ScanReport> {
    let report = scan_feed(driver, options);

    if report.nodes_seen == 0 {
        tracing::warn!(
            diagnostic = %diagnostic_path.display(),
            "no content nodes found, dumping raw document"
        );
        let raw = driver.raw_document().unwrap_or_default();
        sink::write_diagnostic(&raw, diagnostic_path)?;
        return Ok(report);
    }

    sink::write_records(&report.records, records_path)?;
    Ok(report)
}
