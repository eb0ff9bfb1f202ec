use std::sync::Arc;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{EntityKind, FeedError, FeedReport, VesselRecord, VesselRequest};

use crate::Pelorus;
use crate::router::keys::VesselKey;

impl Pelorus {
    /// Fetch vessel reports, merged and ranked across providers.
    ///
    /// Synthetic providers are first-class here: check
    /// `sources[].reliability` for `Projection` to tell generated
    /// positions from observations. Always resolves; see the
    /// degrade-to-empty contract on [`ports`](Self::ports).
    pub async fn vessels(&self, req: &VesselRequest) -> Vec<VesselRecord> {
        self.vessels_report(req).await.records
    }

    /// Like [`vessels`](Self::vessels), but returns the full report with
    /// result provenance and per-provider warnings.
    #[tracing::instrument(target = "pelorus::router", skip(self, req), fields(region = ?req.region, limit = req.limit))]
    pub async fn vessels_report(&self, req: &VesselRequest) -> FeedReport<VesselRecord> {
        let key = VesselKey::from(req);
        let req = req.clone();
        self.aggregate_kind(
            EntityKind::Vessel,
            "vessels",
            self.stores.vessels.as_ref(),
            key,
            req.limit,
            move |c: Arc<dyn FeedConnector>| {
                c.as_vessel_provider()?;
                let req = req.clone();
                Some(async move {
                    match c.as_vessel_provider() {
                        Some(p) => p.vessels(&req).await,
                        None => Err(FeedError::unsupported("vessels")),
                    }
                })
            },
        )
        .await
    }
}
