//! pelorus-core
//!
//! Core traits and utilities shared across the pelorus ecosystem.
//!
//! - `connector`: the `FeedConnector` trait and per-capability provider traits.
//! - `cache`: the TTL + last-known-good cache backing the orchestrator.
//! - `retry`: bounded retry with backoff for transient failures.
//! - `rank`: deduplication and relevance scoring for merged record sets.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the cache
//! guards its state with `tokio::sync::Mutex` and the retry helper sleeps
//! with `tokio::time::sleep`. Code using them must run under a Tokio 1.x
//! runtime.
#![warn(missing_docs)]

/// The TTL cache with last-known-good retention.
pub mod cache;
/// Connector capability traits and the primary `FeedConnector` interface.
pub mod connector;
/// Deduplication and relevance scoring for merged record sets.
pub mod rank;
/// Bounded retry with fixed or exponential backoff.
pub mod retry;

pub use cache::{CacheStats, TtlCache};
pub use connector::{
    DisruptionProvider, FeedConnector, PortProvider, TariffProvider, VesselProvider,
};
pub use rank::{Rankable, dedup, normalize_title, rank, relevance_score};
pub use retry::retry;

// Re-export the shared DTOs so downstream crates can depend on
// `pelorus-core` only.
pub use pelorus_types::{
    CacheConfig, ConnectorKey, Coordinates, DisruptionRecord, DisruptionRequest, DisruptionStatus,
    EntityKind, EntityRecord, FallbackConfig, FeedError, FeedReport, Origin, PortRecord,
    PortRequest, ProxyEndpoint, ProxyEnvelope, Reliability, RetryConfig, ScoreWeights, Severity,
    SourceRef, TariffRecord, TariffRequest, VesselKind, VesselRecord, VesselRequest,
};
