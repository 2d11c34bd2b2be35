//! Bounded feed-traversal controller.
//!
//! Drives progressive content loading until the feed stops growing or a
//! hard iteration cap is hit. Fully independent of extraction: the
//! controller only measures extent and requests more content, it never
//! inspects nodes.

use std::thread;

use serde::Serialize;

use crate::driver::FeedDriver;
use crate::options::Options;

/// Phase of the traversal controller.
///
/// `Advancing` is the in-flight state; [`run_to_exhaustion`] only ever
/// returns one of the terminal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedPhase {
    /// Content is still being loaded.
    Advancing,
    /// Two consecutive extent measurements were equal: the available
    /// content is exhausted.
    Settled,
    /// The hard iteration cap was reached while the feed kept growing.
    Exhausted,
}

/// Transient controller state, discarded after the loop ends.
#[derive(Debug)]
struct TraversalState {
    last_known_extent: u64,
    iteration: usize,
    max_iterations: usize,
}

/// Loads feed content to exhaustion.
///
/// Each step requests more content, waits `Options::settle_delay`, and
/// re-measures the extent. No growth between consecutive measurements
/// settles the traversal; `Options::max_load_iterations` steps exhaust it
/// unconditionally, guaranteeing termination even for feeds that grow on
/// every step. A driver failure while advancing or measuring reads as end
/// of content, never as an error.
pub fn run_to_exhaustion<D: FeedDriver>(driver: &mut D, options: &Options) -> FeedPhase {
    let Ok(initial_extent) = driver.content_extent() else {
        return FeedPhase::Settled;
    };
    let mut state = TraversalState {
        last_known_extent: initial_extent,
        iteration: 0,
        max_iterations: options.max_load_iterations,
    };

    loop {
        if state.iteration >= state.max_iterations {
            tracing::debug!(iterations = state.iteration, "load iteration cap reached");
            return FeedPhase::Exhausted;
        }
        if driver.request_more().is_err() {
            return FeedPhase::Settled;
        }
        thread::sleep(options.settle_delay);
        state.iteration += 1;

        // A failed measurement reads as no growth.
        let extent = driver.content_extent().unwrap_or(state.last_known_extent);
        if extent == state.last_known_extent {
            tracing::debug!(extent, iterations = state.iteration, "extent settled");
            return FeedPhase::Settled;
        }
        state.last_known_extent = extent;
    }
}
