use std::sync::Arc;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{DisruptionRecord, DisruptionRequest, EntityKind, FeedError, FeedReport};

use crate::Pelorus;
use crate::router::keys::DisruptionKey;

impl Pelorus {
    /// Fetch disruption events, merged and ranked across providers.
    ///
    /// Behavior:
    /// - Providers frequently syndicate the same event; records are
    ///   deduplicated on normalized title, the highest-priority provider's
    ///   copy winning.
    /// - Always resolves; see the degrade-to-empty contract on
    ///   [`ports`](Self::ports).
    pub async fn disruptions(&self, req: &DisruptionRequest) -> Vec<DisruptionRecord> {
        self.disruptions_report(req).await.records
    }

    /// Like [`disruptions`](Self::disruptions), but returns the full
    /// report with result provenance and per-provider warnings.
    #[tracing::instrument(target = "pelorus::router", skip(self, req), fields(min_severity = ?req.min_severity, limit = req.limit))]
    pub async fn disruptions_report(&self, req: &DisruptionRequest) -> FeedReport<DisruptionRecord> {
        let key = DisruptionKey::from(req);
        let req = req.clone();
        self.aggregate_kind(
            EntityKind::Disruption,
            "disruptions",
            self.stores.disruptions.as_ref(),
            key,
            req.limit,
            move |c: Arc<dyn FeedConnector>| {
                c.as_disruption_provider()?;
                let req = req.clone();
                Some(async move {
                    match c.as_disruption_provider() {
                        Some(p) => p.disruptions(&req).await,
                        None => Err(FeedError::unsupported("disruptions")),
                    }
                })
            },
        )
        .await
    }
}
