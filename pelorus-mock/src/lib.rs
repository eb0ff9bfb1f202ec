//! pelorus-mock
//!
//! Mock connector for CI-safe examples and tests. `MockConnector` serves
//! deterministic data from static fixtures; `dynamic::DynamicMockConnector`
//! lets tests script per-kind behaviors (return, fail, hang) and observe
//! call counts from the outside.

use async_trait::async_trait;
use pelorus_core::connector::{
    DisruptionProvider, FeedConnector, PortProvider, TariffProvider, VesselProvider,
};
use pelorus_core::{
    DisruptionRecord, DisruptionRequest, EntityKind, FeedError, PortRecord, PortRequest,
    TariffRecord, TariffRequest, VesselRecord, VesselRequest,
};

/// Rule-driven mock with externally scripted behaviors.
pub mod dynamic;
mod fixtures;

/// Region filter value that forces a connector failure, for tests that
/// need a deterministic failing provider without scripting the dynamic mock.
pub const FAIL_REGION: &str = "FAIL";

/// Mock connector for CI-safe examples. Provides deterministic data from
/// static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Construct the fixture-backed mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(region: Option<&str>, capability: &'static str) -> Result<(), FeedError> {
        if region == Some(FAIL_REGION) {
            return Err(FeedError::connector(
                "pelorus-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl FeedConnector for MockConnector {
    fn name(&self) -> &'static str {
        "pelorus-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_kind(&self, _kind: EntityKind) -> bool {
        true
    }

    fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        Some(self as &dyn PortProvider)
    }
    fn as_disruption_provider(&self) -> Option<&dyn DisruptionProvider> {
        Some(self as &dyn DisruptionProvider)
    }
    fn as_vessel_provider(&self) -> Option<&dyn VesselProvider> {
        Some(self as &dyn VesselProvider)
    }
    fn as_tariff_provider(&self) -> Option<&dyn TariffProvider> {
        Some(self as &dyn TariffProvider)
    }
}

#[async_trait]
impl PortProvider for MockConnector {
    async fn ports(&self, req: &PortRequest) -> Result<Vec<PortRecord>, FeedError> {
        Self::maybe_fail(req.region.as_deref(), "ports")?;
        Ok(fixtures::ports::all()
            .into_iter()
            .filter(|p| match &req.region {
                Some(region) => p.region.as_deref() == Some(region.as_str()),
                None => true,
            })
            .collect())
    }
}

#[async_trait]
impl DisruptionProvider for MockConnector {
    async fn disruptions(
        &self,
        req: &DisruptionRequest,
    ) -> Result<Vec<DisruptionRecord>, FeedError> {
        Ok(fixtures::disruptions::all()
            .into_iter()
            .filter(|d| match req.min_severity {
                Some(min) => d.severity >= min,
                None => true,
            })
            .collect())
    }
}

#[async_trait]
impl VesselProvider for MockConnector {
    async fn vessels(&self, req: &VesselRequest) -> Result<Vec<VesselRecord>, FeedError> {
        Self::maybe_fail(req.region.as_deref(), "vessels")?;
        Ok(fixtures::vessels::all())
    }
}

#[async_trait]
impl TariffProvider for MockConnector {
    async fn tariffs(&self, req: &TariffRequest) -> Result<Vec<TariffRecord>, FeedError> {
        Ok(fixtures::tariffs::all()
            .into_iter()
            .filter(|t| match &req.partner {
                Some(partner) => t.partner.as_deref() == Some(partner.as_str()),
                None => true,
            })
            .collect())
    }
}
