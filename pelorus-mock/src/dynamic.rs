use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pelorus_core::connector::{
    DisruptionProvider, FeedConnector, PortProvider, TariffProvider, VesselProvider,
};
use pelorus_core::{
    DisruptionRecord, DisruptionRequest, EntityKind, FeedError, PortRecord, PortRequest,
    TariffRecord, TariffRequest, VesselRecord, VesselRequest,
};

/// Instruction for how a capability should behave on the next calls.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided records immediately.
    Return(Vec<T>),
    /// Fail immediately with the provided error.
    Fail(FeedError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    port_rule: Option<MockBehavior<PortRecord>>,
    disruption_rule: Option<MockBehavior<DisruptionRecord>>,
    vessel_rule: Option<MockBehavior<VesselRecord>>,
    tariff_rule: Option<MockBehavior<TariffRecord>>,
    calls: HashMap<EntityKind, u64>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `ports` calls.
    pub async fn set_ports(&self, behavior: MockBehavior<PortRecord>) {
        self.state.lock().await.port_rule = Some(behavior);
    }

    /// Set the behavior for `disruptions` calls.
    pub async fn set_disruptions(&self, behavior: MockBehavior<DisruptionRecord>) {
        self.state.lock().await.disruption_rule = Some(behavior);
    }

    /// Set the behavior for `vessels` calls.
    pub async fn set_vessels(&self, behavior: MockBehavior<VesselRecord>) {
        self.state.lock().await.vessel_rule = Some(behavior);
    }

    /// Set the behavior for `tariffs` calls.
    pub async fn set_tariffs(&self, behavior: MockBehavior<TariffRecord>) {
        self.state.lock().await.tariff_rule = Some(behavior);
    }

    /// Number of provider calls observed for a kind.
    pub async fn call_count(&self, kind: EntityKind) -> u64 {
        *self.state.lock().await.calls.get(&kind).unwrap_or(&0)
    }

    /// Clear all configured behaviors and call counters.
    pub async fn reset(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector whose behavior is scripted per entity kind, for
/// orchestrator tests: force failures, stalls, or canned record sets and
/// observe how often each capability was invoked.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Build a connector/controller pair. The `name` must be unique among
    /// registered connectors when priorities are configured.
    #[must_use]
    pub fn new(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        (
            Arc::new(Self {
                name,
                state: state.clone(),
            }),
            DynamicMockController { state },
        )
    }

    async fn act<T: Clone>(&self, kind: EntityKind, rule: Option<MockBehavior<T>>) -> Result<Vec<T>, FeedError> {
        {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(kind).or_insert(0) += 1;
        }
        match rule {
            None => Ok(vec![]),
            Some(MockBehavior::Return(records)) => Ok(records),
            Some(MockBehavior::Fail(err)) => Err(err),
            Some(MockBehavior::Hang) => {
                // Never resolves; the orchestrator's timeout reaps it.
                std::future::pending::<()>().await;
                unreachable!("pending future resolved")
            }
        }
    }
}

impl FeedConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
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
impl PortProvider for DynamicMockConnector {
    async fn ports(&self, _req: &PortRequest) -> Result<Vec<PortRecord>, FeedError> {
        let rule = self.state.lock().await.port_rule.clone();
        self.act(EntityKind::Port, rule).await
    }
}

#[async_trait]
impl DisruptionProvider for DynamicMockConnector {
    async fn disruptions(
        &self,
        _req: &DisruptionRequest,
    ) -> Result<Vec<DisruptionRecord>, FeedError> {
        let rule = self.state.lock().await.disruption_rule.clone();
        self.act(EntityKind::Disruption, rule).await
    }
}

#[async_trait]
impl VesselProvider for DynamicMockConnector {
    async fn vessels(&self, _req: &VesselRequest) -> Result<Vec<VesselRecord>, FeedError> {
        let rule = self.state.lock().await.vessel_rule.clone();
        self.act(EntityKind::Vessel, rule).await
    }
}

#[async_trait]
impl TariffProvider for DynamicMockConnector {
    async fn tariffs(&self, _req: &TariffRequest) -> Result<Vec<TariffRecord>, FeedError> {
        let rule = self.state.lock().await.tariff_rule.clone();
        self.act(EntityKind::Tariff, rule).await
    }
}
