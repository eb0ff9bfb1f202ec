use std::sync::Arc;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{EntityKind, FeedError, FeedReport, TariffRecord, TariffRequest};

use crate::Pelorus;
use crate::router::keys::TariffKey;

impl Pelorus {
    /// Fetch tariff lines, merged and ranked across providers.
    ///
    /// Always resolves; see the degrade-to-empty contract on
    /// [`ports`](Self::ports).
    pub async fn tariffs(&self, req: &TariffRequest) -> Vec<TariffRecord> {
        self.tariffs_report(req).await.records
    }

    /// Like [`tariffs`](Self::tariffs), but returns the full report with
    /// result provenance and per-provider warnings.
    #[tracing::instrument(target = "pelorus::router", skip(self, req), fields(partner = ?req.partner, limit = req.limit))]
    pub async fn tariffs_report(&self, req: &TariffRequest) -> FeedReport<TariffRecord> {
        let key = TariffKey::from(req);
        let req = req.clone();
        self.aggregate_kind(
            EntityKind::Tariff,
            "tariffs",
            self.stores.tariffs.as_ref(),
            key,
            req.limit,
            move |c: Arc<dyn FeedConnector>| {
                c.as_tariff_provider()?;
                let req = req.clone();
                Some(async move {
                    match c.as_tariff_provider() {
                        Some(p) => p.tariffs(&req).await,
                        None => Err(FeedError::unsupported("tariffs")),
                    }
                })
            },
        )
        .await
    }
}
