//! Per-field resolution over ordered fallback chains.
//!
//! Content nodes are heterogeneous: the same feed renders structurally
//! different markup per item (native posts, reposts, sponsored items), so
//! every logical field is resolved through an ordered list of queries
//! rather than a single fixed one. Chain order encodes specificity (the
//! most distinctive structural signature is tried first, the generic
//! fallback last) and resolution short-circuits on the first usable
//! result.

use url::Url;

use crate::accessor::safe_text;
use crate::driver::{DriverResult, FeedDriver};
use crate::options::Options;
use crate::patterns::{
    ACTOR_NAME_QUERIES, BODY_QUERIES, BODY_REFRESH_QUERIES, EXPAND_CONTROL_QUERY,
    PERMALINK_MARKERS,
};

/// Resolves the actor name for one node.
///
/// First non-empty result across the name query chain, or `None` when
/// neither pattern matches.
pub fn resolve_author<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    options: &Options,
) -> Option<String> {
    ACTOR_NAME_QUERIES.iter().find_map(|query| {
        safe_text(driver, node, query, options.node_read_timeout).filter(|text| !text.is_empty())
    })
}

/// Resolves the body text for one node.
///
/// First result across the body chain whose trimmed character count
/// exceeds `Options::min_body_len`; the threshold filters the decorative
/// empty matches the generic fallback queries produce.
pub fn resolve_body<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    options: &Options,
) -> Option<String> {
    resolve_body_over(driver, node, BODY_QUERIES, options)
}

fn resolve_body_over<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    queries: &[&str],
    options: &Options,
) -> Option<String> {
    queries.iter().find_map(|query| {
        safe_text(driver, node, query, options.node_read_timeout)
            .filter(|text| text.chars().count() > options.min_body_len)
    })
}

/// Best-effort expansion of a truncated body, then re-resolution.
///
/// Every expand control under the node is clicked; a failed click is
/// skipped, not fatal to the node. Failing to enumerate the controls at
/// all is a node-level fault and propagates. After expansion the body is
/// re-read over the narrower refresh chain; the original body is kept
/// when the re-read comes up empty.
pub fn expand_and_reresolve_body<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    current: Option<String>,
    options: &Options,
) -> DriverResult<Option<String>> {
    let controls = driver.expand_controls(node, EXPAND_CONTROL_QUERY)?;
    if controls == 0 {
        return Ok(current);
    }

    for index in 0..controls {
        if let Err(err) =
            driver.click_expand(node, EXPAND_CONTROL_QUERY, index, options.expand_click_timeout)
        {
            tracing::debug!(index, %err, "expand click failed");
        }
    }

    Ok(resolve_body_over(driver, node, BODY_REFRESH_QUERIES, options).or(current))
}

/// Resolves the permalink for one node.
///
/// Link targets are scanned in document order; the first containing a
/// permalink path marker wins. When none match, the first link target is
/// used; with no links at all the field is absent. Failing to enumerate
/// the links is a node-level fault and propagates.
pub fn resolve_permalink<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    options: &Options,
) -> DriverResult<Option<String>> {
    let targets = driver.link_targets(node)?;
    let chosen = targets
        .iter()
        .find(|target| PERMALINK_MARKERS.iter().any(|marker| target.contains(marker)))
        .or_else(|| targets.first());
    Ok(chosen.map(|target| absolutize(target, options.base_url.as_deref())))
}

/// Joins a relative target against the configured base. Absolute targets
/// pass through unchanged, as does everything when no base is set or the
/// join fails.
fn absolutize(target: &str, base: Option<&str>) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        return target.to_string();
    }
    let Some(base) = base else {
        return target.to_string();
    };
    match Url::parse(base).and_then(|base| base.join(target)) {
        Ok(url) => url.to_string(),
        Err(_) => target.to_string(),
    }
}
