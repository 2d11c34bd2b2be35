//! Text normalization for persisted body text.
//!
//! Attribute extraction runs on the raw resolved body so truncation
//! markers cannot interfere with boundary matches; only the stored `text`
//! field goes through [`clean`].

use crate::patterns::{TRUNCATION_MARKER, WHITESPACE_RUN};

/// Cleans resolved body text for storage.
///
/// Strips trailing `…more`-style truncation markers, collapses every run
/// of whitespace (including newlines) to a single space, and trims the
/// ends. Returns `None` when nothing remains.
///
/// The marker strip repeats until the text no longer ends in a marker, so
/// the operation is idempotent: `clean(clean(x)) == clean(x)`.
#[must_use]
pub fn clean(text: &str) -> Option<String> {
    let mut current = text.trim();
    while let Some(marker) = TRUNCATION_MARKER.find(current) {
        current = current[..marker.start()].trim_end();
    }

    let collapsed = WHITESPACE_RUN.replace_all(current, " ");
    let cleaned = collapsed.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
