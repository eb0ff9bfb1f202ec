//! Request types accepted by connectors and the orchestrator.
//!
//! All requests are plain structs with `Default`; construct with struct
//! update syntax. The orchestrator composes cache keys from these fields,
//! so two requests with different parameters never share a cache entry.

use serde::{Deserialize, Serialize};

use crate::entity::Severity;

/// Parameters for a port listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortRequest {
    /// Restrict to a trade region bucket, e.g. "north-europe".
    pub region: Option<String>,
    /// Keep only the top-ranked `limit` records after merge.
    pub limit: Option<usize>,
}

/// Parameters for a disruption listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisruptionRequest {
    /// Drop records below this severity.
    pub min_severity: Option<Severity>,
    /// Keep only the top-ranked `limit` records after merge.
    pub limit: Option<usize>,
}

/// Parameters for a vessel listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VesselRequest {
    /// Restrict to a trade region bucket.
    pub region: Option<String>,
    /// Keep only the top-ranked `limit` records after merge.
    pub limit: Option<usize>,
}

/// Parameters for a tariff listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TariffRequest {
    /// Restrict to a trading partner; `None` means MFN rates.
    pub partner: Option<String>,
    /// Keep only the top-ranked `limit` records after merge.
    pub limit: Option<usize>,
}
