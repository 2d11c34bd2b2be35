//! Compiled regex patterns, query chains, and fixed vocabularies.
//!
//! All regexes are compiled once at first use via `LazyLock`. Query chains
//! are ordered most specific first; the order encodes precedence and the
//! resolver short-circuits on the first usable result.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Contact extraction
// =============================================================================

/// Email shape: local part (letters, digits, `. + - _`) at a dot-separated
/// domain. Syntactic shape only, no deliverability validation.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9.+_-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").expect("valid regex")
});

/// Phone shape: optional `+`country code, optional parenthesized area code,
/// then 6-15 digits with space/dash/dot separators. Deliberately permissive;
/// the digit-count floor in the extractor rejects short numeric noise.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s\-.]?)?(?:\(?\d{3,4}\)?[\s\-.]?)?[\d\s\-.]{6,15}")
        .expect("valid regex")
});

// =============================================================================
// Text cleaning
// =============================================================================

/// Trailing `…more` truncation marker left on collapsed feed items.
pub static TRUNCATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"…\s*more$").expect("valid regex"));

/// Any run of whitespace, including newlines.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// =============================================================================
// Field query chains
// =============================================================================

/// Structural role marker identifying one content node in the feed.
pub const CONTENT_NODE_QUERY: &str = "div[role='article']";

/// Queries for the actor name, most specific first.
pub const ACTOR_NAME_QUERIES: &[&str] = &[
    "span.feed-shared-actor__name",
    ".feed-shared-actor__name",
];

/// Queries for the item body, most specific first. The bare paragraph
/// fallback catches layouts none of the distinctive signatures cover.
pub const BODY_QUERIES: &[&str] = &[
    "div.feed-shared-text__text-view",
    "div.update-components-text",
    "span.break-words",
    "div[dir='ltr'] p",
    "p",
];

/// Body queries for the re-read after expansion. Omits the bare paragraph
/// fallback, which on an expanded item tends to match punctuation-only
/// decoration.
pub const BODY_REFRESH_QUERIES: &[&str] = &[
    "div.feed-shared-text__text-view",
    "div.update-components-text",
    "span.break-words",
    "div[dir='ltr'] p",
];

/// Query for expand/see-more controls under a content node.
pub const EXPAND_CONTROL_QUERY: &str = "button[aria-label*='more']";

/// Path fragments identifying a permalink among a node's link targets.
pub const PERMALINK_MARKERS: &[&str] = &["/posts/", "/feed/update/", "/activity/", "/detail/"];

// =============================================================================
// Location gazetteer
// =============================================================================

/// Recognized place names, matched case-insensitively in table order with
/// the casing below returned verbatim. A closed vocabulary: unlisted
/// places are deliberately not tagged.
pub const PLACE_GAZETTEER: &[&str] = &[
    "Hyderabad",
    "Bengaluru",
    "Bangalore",
    "Chennai",
    "Mumbai",
    "Delhi",
    "Kolkata",
    "Pune",
    "India",
    "USA",
    "United Kingdom",
    "UK",
    "Dubai",
    "Noida",
    "Gurgaon",
];
