//! pelorus-types
//!
//! Shared data transfer objects for the pelorus ecosystem: entity records,
//! source references, request types, configuration tables, report
//! envelopes, and the unified error type.
//!
//! Everything here is plain data: serde round-trips, no I/O, no runtime
//! coupling. Behavior lives in `pelorus-core` and the orchestrator.
#![warn(missing_docs)]

/// Configuration tables: cache TTLs, retry/backoff, score weights, proxies.
pub mod config;
/// Connector identity types.
pub mod connector;
/// Entity records, source references, and the enums they carry.
pub mod entity;
/// Unified error type for the pelorus workspace.
pub mod error;
/// Report envelopes produced by the orchestrator.
pub mod report;
/// Request types accepted by connectors and the orchestrator.
pub mod request;

pub use config::{CacheConfig, FallbackConfig, ProxyEndpoint, ProxyEnvelope, RetryConfig, ScoreWeights};
pub use connector::ConnectorKey;
pub use entity::{
    Coordinates, DisruptionRecord, DisruptionStatus, EntityKind, EntityRecord, PortRecord,
    Reliability, Severity, SourceRef, TariffRecord, VesselKind, VesselRecord,
};
pub use error::FeedError;
pub use report::{FeedReport, Origin};
pub use request::{DisruptionRequest, PortRequest, TariffRequest, VesselRequest};
