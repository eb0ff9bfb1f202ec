//! Typed, canonicalized cache keys per entity kind.
//!
//! Keys are composed from the request parameters, so two requests with
//! different parameters never collide, and canonicalization (trim +
//! lowercase on free-text filters) keeps near-identical requests from
//! minting distinct entries.

use pelorus_core::{DisruptionRequest, PortRequest, Severity, TariffRequest, VesselRequest};

fn canonical(raw: &Option<String>) -> Option<String> {
    raw.as_deref().map(|s| s.trim().to_ascii_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PortKey {
    region: Option<String>,
    limit: Option<usize>,
}

impl From<&PortRequest> for PortKey {
    fn from(req: &PortRequest) -> Self {
        Self {
            region: canonical(&req.region),
            limit: req.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DisruptionKey {
    min_severity: Option<Severity>,
    limit: Option<usize>,
}

impl From<&DisruptionRequest> for DisruptionKey {
    fn from(req: &DisruptionRequest) -> Self {
        Self {
            min_severity: req.min_severity,
            limit: req.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct VesselKey {
    region: Option<String>,
    limit: Option<usize>,
}

impl From<&VesselRequest> for VesselKey {
    fn from(req: &VesselRequest) -> Self {
        Self {
            region: canonical(&req.region),
            limit: req.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TariffKey {
    partner: Option<String>,
    limit: Option<usize>,
}

impl From<&TariffRequest> for TariffKey {
    fn from(req: &TariffRequest) -> Self {
        Self {
            partner: canonical(&req.partner),
            limit: req.limit,
        }
    }
}
