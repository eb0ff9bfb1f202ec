//! Pelorus aggregates maritime/trade intelligence across multiple data
//! sources.
//!
//! Overview
//! - Routes requests to connectors that implement the `pelorus_core`
//!   contracts (government APIs, news wires, synthetic projections).
//! - Fans out to all eligible providers per entity kind with a
//!   settle-all pattern: every provider completes or fails independently
//!   and merging happens only after all settle.
//! - Deduplicates merged records (normalized title or id), ranks them
//!   with a deterministic relevance score, truncates to the requested
//!   limit, and caches the result under a typed per-request key.
//! - Never surfaces provider failures to plain callers: on total failure
//!   a call degrades to the last known good cached value, then to an
//!   empty list. Diagnostics-oriented callers use the `*_report` variants
//!   to see provenance and per-provider warnings.
//!
//! Key behaviors and trade-offs
//! - Caching: per-kind TTL tables (vessels churn in minutes, tariffs in
//!   months); a TTL of zero disables caching for a kind. Live stores are
//!   capacity-bounded, so parameter-heavy callers cannot grow memory
//!   without bound.
//! - Retry: every provider call runs inside one centralized retry policy
//!   with exponential backoff; only transient failures are retried.
//! - Timeouts: a per-provider timeout inside the retry loop plus an
//!   optional whole-request deadline bound every aggregation.
//! - Priorities: per-kind preferences order providers for merge
//!   precedence; on dedup collisions the higher-priority copy wins.
//!
//! Examples
//! Building an orchestrator over a mock and a synthetic fleet:
//! ```rust,ignore
//! use std::sync::Arc;
//! use pelorus::{Pelorus, EntityKind};
//!
//! let mock = Arc::new(pelorus_mock::MockConnector::new());
//! let ais = Arc::new(pelorus_feeds::SyntheticConnector::with_seed(7));
//!
//! let pelorus = Pelorus::builder()
//!     .with_connector(mock.clone())
//!     .with_connector(ais.clone())
//!     .prefer_for_kind(EntityKind::Vessel, &[mock, ais])
//!     .build()?;
//!
//! let disruptions = pelorus
//!     .disruptions(&pelorus::DisruptionRequest { min_severity: None, limit: Some(10) })
//!     .await;
//! ```
//!
//! See `pelorus/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Pelorus, PelorusBuilder};

// Re-export the behavioral surface from pelorus-core and the DTO layer
// from pelorus-types for convenience.
pub use pelorus_core::{CacheStats, FeedConnector};
pub use pelorus_types::{
    CacheConfig,
    ConnectorKey,
    Coordinates,
    DisruptionRecord,
    DisruptionRequest,
    DisruptionStatus,
    EntityKind,
    EntityRecord,
    FallbackConfig,
    FeedError,
    FeedReport,
    Origin,
    PortRecord,
    PortRequest,
    ProxyEndpoint,
    ProxyEnvelope,
    Reliability,
    RetryConfig,
    ScoreWeights,
    Severity,
    SourceRef,
    TariffRecord,
    TariffRequest,
    VesselKind,
    VesselRecord,
    VesselRequest,
};
