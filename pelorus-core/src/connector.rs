use async_trait::async_trait;

use pelorus_types::{
    DisruptionRecord, DisruptionRequest, EntityKind, FeedError, PortRecord, PortRequest,
    TariffRecord, TariffRequest, VesselRecord, VesselRequest,
};
pub use pelorus_types::ConnectorKey;

/// Focused role trait for connectors that provide port profiles.
///
/// Implementations reject with a [`FeedError`] or return `Ok(vec![])` on
/// "no data"; they never panic on upstream failures.
#[async_trait]
pub trait PortProvider: Send + Sync {
    /// Fetch port records matching the request.
    async fn ports(&self, req: &PortRequest) -> Result<Vec<PortRecord>, FeedError>;
}

/// Focused role trait for connectors that provide disruption events.
#[async_trait]
pub trait DisruptionProvider: Send + Sync {
    /// Fetch disruption records matching the request.
    async fn disruptions(&self, req: &DisruptionRequest) -> Result<Vec<DisruptionRecord>, FeedError>;
}

/// Focused role trait for connectors that provide vessel reports.
#[async_trait]
pub trait VesselProvider: Send + Sync {
    /// Fetch vessel records matching the request.
    async fn vessels(&self, req: &VesselRequest) -> Result<Vec<VesselRecord>, FeedError>;
}

/// Focused role trait for connectors that provide tariff lines.
#[async_trait]
pub trait TariffProvider: Send + Sync {
    /// Fetch tariff records matching the request.
    async fn tariffs(&self, req: &TariffRequest) -> Result<Vec<TariffRecord>, FeedError>;
}

/// Main connector trait implemented by source crates. Exposes capability
/// discovery so the orchestrator can fan out only to connectors that
/// actually serve an entity kind.
pub trait FeedConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "gov-trade", "newswire").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring per-kind priorities.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to serve a given entity kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly
    /// override this method to declare which kinds they serve.
    fn supports_kind(&self, kind: EntityKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise port capability by returning a usable trait object when supported.
    fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        None
    }

    /// Advertise disruption capability by returning a usable trait object when supported.
    fn as_disruption_provider(&self) -> Option<&dyn DisruptionProvider> {
        None
    }

    /// Advertise vessel capability by returning a usable trait object when supported.
    fn as_vessel_provider(&self) -> Option<&dyn VesselProvider> {
        None
    }

    /// Advertise tariff capability by returning a usable trait object when supported.
    fn as_tariff_provider(&self) -> Option<&dyn TariffProvider> {
        None
    }
}
