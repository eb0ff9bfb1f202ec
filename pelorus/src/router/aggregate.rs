use pelorus_core::{
    DisruptionRequest, EntityKind, EntityRecord, PortRequest, TariffRequest, VesselRequest,
};

use crate::Pelorus;

impl Pelorus {
    /// Kind-agnostic entry point: aggregate `kind` with default filters
    /// and an optional result cap, wrapping each record in the tagged
    /// [`EntityRecord`] enum.
    ///
    /// Always resolves; on total provider failure the result degrades to
    /// the last known good value or an empty list, never an error.
    pub async fn aggregate(&self, kind: EntityKind, limit: Option<usize>) -> Vec<EntityRecord> {
        match kind {
            EntityKind::Port => self
                .ports(&PortRequest { region: None, limit })
                .await
                .into_iter()
                .map(EntityRecord::Port)
                .collect(),
            EntityKind::Disruption => self
                .disruptions(&DisruptionRequest {
                    min_severity: None,
                    limit,
                })
                .await
                .into_iter()
                .map(EntityRecord::Disruption)
                .collect(),
            EntityKind::Vessel => self
                .vessels(&VesselRequest { region: None, limit })
                .await
                .into_iter()
                .map(EntityRecord::Vessel)
                .collect(),
            EntityKind::Tariff => self
                .tariffs(&TariffRequest {
                    partner: None,
                    limit,
                })
                .await
                .into_iter()
                .map(EntityRecord::Tariff)
                .collect(),
        }
    }

    /// Drop every cached aggregate for `kind`, live and last-known-good.
    pub async fn invalidate(&self, kind: EntityKind) {
        match kind {
            EntityKind::Port => {
                if let Some(store) = &self.stores.ports {
                    store.clear().await;
                }
            }
            EntityKind::Disruption => {
                if let Some(store) = &self.stores.disruptions {
                    store.clear().await;
                }
            }
            EntityKind::Vessel => {
                if let Some(store) = &self.stores.vessels {
                    store.clear().await;
                }
            }
            EntityKind::Tariff => {
                if let Some(store) = &self.stores.tariffs {
                    store.clear().await;
                }
            }
        }
    }

    /// Drop every cached aggregate across all kinds.
    pub async fn clear_cache(&self) {
        for kind in EntityKind::all() {
            self.invalidate(kind).await;
        }
    }

    /// Aggregate hit/miss counters for a kind's cache, when caching is
    /// enabled for it. Diagnostics only.
    pub async fn cache_stats(&self, kind: EntityKind) -> Option<pelorus_core::CacheStats> {
        match kind {
            EntityKind::Port => match &self.stores.ports {
                Some(store) => Some(store.stats().await),
                None => None,
            },
            EntityKind::Disruption => match &self.stores.disruptions {
                Some(store) => Some(store.stats().await),
                None => None,
            },
            EntityKind::Vessel => match &self.stores.vessels {
                Some(store) => Some(store.stats().await),
                None => None,
            },
            EntityKind::Tariff => match &self.stores.tariffs {
                Some(store) => Some(store.stats().await),
                None => None,
            },
        }
    }
}
