//! Configuration options for feed scanning.
//!
//! The `Options` struct carries every tunable of the pipeline. There are
//! no command-line flags, environment variables, or persisted settings;
//! destination paths are passed as plain parameters by the caller.

use std::time::Duration;

/// Configuration options for a feed scan.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard settings.
///
/// # Example
///
/// ```rust
/// use feedsift::Options;
///
/// let options = Options {
///     max_load_iterations: 50,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Bounded wait for a single sub-element text read.
    ///
    /// Default: 200 ms
    pub node_read_timeout: Duration,

    /// Bounded wait for a single expand-control click.
    ///
    /// Default: 200 ms
    pub expand_click_timeout: Duration,

    /// One-shot wait before the first traversal step, giving a live feed
    /// time to finish rendering. Snapshot callers usually set this to zero.
    ///
    /// Default: 1.5 s
    pub render_grace: Duration,

    /// Wait between requesting more content and re-measuring the extent.
    ///
    /// Default: 3.5 s
    pub settle_delay: Duration,

    /// Hard upper bound on traversal steps. Guarantees termination even
    /// for feeds that keep growing on every step.
    ///
    /// Default: 500
    pub max_load_iterations: usize,

    /// Minimum trimmed character count for a body candidate. Filters the
    /// decorative empty matches the generic fallback queries produce.
    ///
    /// Default: 2
    pub min_body_len: usize,

    /// Base URL for resolving relative permalink targets. Absolute targets
    /// pass through unchanged.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Replacement gazetteer for location tagging. Entries are matched
    /// case-insensitively in table order and returned in the casing given
    /// here. `None` uses the built-in table.
    ///
    /// Default: `None`
    pub gazetteer: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            node_read_timeout: Duration::from_millis(200),
            expand_click_timeout: Duration::from_millis(200),
            render_grace: Duration::from_millis(1500),
            settle_delay: Duration::from_millis(3500),
            max_load_iterations: 500,
            min_body_len: 2,
            base_url: None,
            gazetteer: None,
        }
    }
}
