use std::sync::Arc;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{EntityKind, FeedError, FeedReport, PortRecord, PortRequest};

use crate::Pelorus;
use crate::router::keys::PortKey;

impl Pelorus {
    /// Fetch port profiles, merged and ranked across providers.
    ///
    /// Degrade-to-empty contract: this method always resolves. On total
    /// provider failure it serves the last known good value for the same
    /// request parameters, or an empty list; it never returns an error.
    pub async fn ports(&self, req: &PortRequest) -> Vec<PortRecord> {
        self.ports_report(req).await.records
    }

    /// Like [`ports`](Self::ports), but returns the full report with
    /// result provenance and per-provider warnings.
    #[tracing::instrument(target = "pelorus::router", skip(self, req), fields(region = ?req.region, limit = req.limit))]
    pub async fn ports_report(&self, req: &PortRequest) -> FeedReport<PortRecord> {
        let key = PortKey::from(req);
        let req = req.clone();
        self.aggregate_kind(
            EntityKind::Port,
            "ports",
            self.stores.ports.as_ref(),
            key,
            req.limit,
            move |c: Arc<dyn FeedConnector>| {
                c.as_port_provider()?;
                let req = req.clone();
                Some(async move {
                    match c.as_port_provider() {
                        Some(p) => p.ports(&req).await,
                        None => Err(FeedError::unsupported("ports")),
                    }
                })
            },
        )
        .await
    }
}
