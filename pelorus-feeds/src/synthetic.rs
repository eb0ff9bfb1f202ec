use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pelorus_core::connector::{FeedConnector, VesselProvider};
use pelorus_core::{
    ConnectorKey, Coordinates, EntityKind, FeedError, Reliability, SourceRef, VesselKind,
    VesselRecord, VesselRequest,
};

// Rough bounding boxes along major trade lanes, tagged with the region
// buckets the rest of the system uses.
const LANES: &[(&str, [f64; 2], [f64; 2])] = &[
    ("north-europe", [48.0, 58.0], [-6.0, 9.0]),
    ("red-sea", [12.0, 30.0], [32.0, 44.0]),
    ("southeast-asia", [-2.0, 8.0], [95.0, 110.0]),
    ("east-asia", [22.0, 38.0], [118.0, 130.0]),
    ("north-america-west", [30.0, 40.0], [-126.0, -116.0]),
];

const NAME_PREFIXES: &[&str] = &["MSC", "MAERSK", "EVER", "COSCO", "CMA CGM", "ONE", "HMM"];
const NAME_SUFFIXES: &[&str] = &[
    "GLORY", "FORTUNE", "OCEAN", "HORIZON", "PIONEER", "TRIUMPH", "HARMONY", "VOYAGER",
];
const DESTINATIONS: &[&str] = &["NLRTM", "SGSIN", "CNSHA", "USLAX", "EGPSD", "DEHAM"];

const KINDS: &[VesselKind] = &[
    VesselKind::Container,
    VesselKind::Container,
    VesselKind::Tanker,
    VesselKind::BulkCarrier,
    VesselKind::Cargo,
];

/// Seeded vessel projection generator standing in for a live AIS feed.
///
/// Every record is tagged [`Reliability::Projection`] so downstream
/// consumers and tests can tell placeholders from observations. The same
/// seed always produces the same fleet, which keeps examples and
/// snapshots stable.
pub struct SyntheticConnector {
    seed: u64,
    fleet_size: usize,
}

impl SyntheticConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("synthetic-ais");

    /// Default fleet with a fixed seed.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(0x5EA_FA2E)
    }

    /// Deterministic fleet derived from `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            fleet_size: 25,
        }
    }

    /// Override the number of generated vessels.
    #[must_use]
    pub const fn fleet_size(mut self, n: usize) -> Self {
        self.fleet_size = n;
        self
    }
}

impl Default for SyntheticConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedConnector for SyntheticConnector {
    fn name(&self) -> &'static str {
        "synthetic-ais"
    }
    fn vendor(&self) -> &'static str {
        "Synthetic"
    }
    fn supports_kind(&self, kind: EntityKind) -> bool {
        matches!(kind, EntityKind::Vessel)
    }
    fn as_vessel_provider(&self) -> Option<&dyn VesselProvider> {
        Some(self as &dyn VesselProvider)
    }
}

#[async_trait]
impl VesselProvider for SyntheticConnector {
    async fn vessels(&self, req: &VesselRequest) -> Result<Vec<VesselRecord>, FeedError> {
        // Fresh RNG per call: the fleet is a pure function of the seed.
        let mut rng = StdRng::seed_from_u64(self.seed);
        let now = Utc::now();

        let mut out = Vec::with_capacity(self.fleet_size);
        for i in 0..self.fleet_size {
            let (lane_region, lat_range, lon_range) = LANES[rng.random_range(0..LANES.len())];
            if let Some(region) = &req.region
                && region != lane_region
            {
                continue;
            }
            let prefix = NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())];
            let suffix = NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())];
            let imo = 9_000_000 + rng.random_range(0..900_000u32);
            out.push(VesselRecord {
                id: imo.to_string(),
                name: format!("{prefix} {suffix} {}", i + 1),
                kind: KINDS[rng.random_range(0..KINDS.len())],
                flag: None,
                position: Some(Coordinates {
                    lat: rng.random_range(lat_range[0]..lat_range[1]),
                    lon: rng.random_range(lon_range[0]..lon_range[1]),
                }),
                speed_knots: Some((rng.random_range(80..220) as f64) / 10.0),
                heading: Some(f64::from(rng.random_range(0..360))),
                destination: Some(DESTINATIONS[rng.random_range(0..DESTINATIONS.len())].to_string()),
                eta: Some(now + ChronoDuration::days(rng.random_range(1..20))),
                updated_at: Some(now),
                sources: vec![SourceRef {
                    name: "synthetic-ais".into(),
                    url: "synthetic://ais".into(),
                    published_at: Some(now),
                    reliability: Reliability::Projection,
                }],
            });
        }
        Ok(out)
    }
}
