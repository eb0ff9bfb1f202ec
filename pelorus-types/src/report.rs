//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Provenance of an aggregation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Assembled from a live fan-out during this call.
    Fresh,
    /// Served from the live cache.
    Cached,
    /// Every provider failed; served from the last-known-good slot.
    LastKnownGood,
    /// Every provider failed and nothing was cached; empty result.
    Empty,
}

/// An aggregation result with provenance and non-fatal warnings.
///
/// The plain orchestrator methods return the records alone; `*_report`
/// variants return this envelope so diagnostics-oriented callers can see
/// where the data came from and which providers failed along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedReport<T> {
    /// Merged, deduplicated, ranked records.
    pub records: Vec<T>,
    /// Where the records came from.
    pub origin: Origin,
    /// Per-provider failures that did not prevent the result.
    pub warnings: Vec<FeedError>,
}

impl<T> FeedReport<T> {
    /// An empty report for the total-failure path.
    #[must_use]
    pub const fn empty(warnings: Vec<FeedError>) -> Self {
        Self {
            records: Vec::new(),
            origin: Origin::Empty,
            warnings,
        }
    }
}
