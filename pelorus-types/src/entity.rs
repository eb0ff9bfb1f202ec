use core::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four entity families the aggregation layer serves.
///
/// These map one-to-one with router endpoints and cache categories and
/// allow consistent Display formatting in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// Port profiles and congestion snapshots.
    Port,
    /// Trade-lane disruption events (strikes, closures, weather).
    Disruption,
    /// Vessel positions and voyage metadata.
    Vessel,
    /// Tariff lines keyed by HS code and partner.
    Tariff,
}

impl EntityKind {
    /// Stable, kebab-case identifier for logs, errors, and cache labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Disruption => "disruption",
            Self::Vessel => "vessel",
            Self::Tariff => "tariff",
        }
    }

    /// All kinds, in router order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Port, Self::Disruption, Self::Vessel, Self::Tariff]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity ladder used by disruptions and congestion levels.
///
/// Ordered ascending so `Ord` comparisons read naturally
/// (`Severity::Critical > Severity::Low`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine or informational.
    #[default]
    Low,
    /// Elevated but localized impact.
    Medium,
    /// Major impact on a trade lane or port.
    High,
    /// Systemic impact; expect rerouting and delays.
    Critical,
}

impl Severity {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much trust a source reference deserves.
///
/// `Projection` marks synthetic/generated data so downstream consumers can
/// distinguish placeholders from real observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    /// Official or first-party source.
    High,
    /// Reputable secondary source (wire services, trade press).
    Medium,
    /// Unverified or aggregated source.
    Low,
    /// Synthetic data produced by a generator, not an observation.
    Projection,
}

/// Lifecycle state of a disruption event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisruptionStatus {
    /// Currently impacting traffic.
    Active,
    /// Being watched; impact not yet confirmed.
    Monitoring,
    /// No longer impacting traffic.
    Resolved,
}

/// Broad vessel classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum VesselKind {
    /// Container ship.
    Container,
    /// Crude/product tanker.
    Tanker,
    /// Dry bulk carrier.
    BulkCarrier,
    /// General cargo or ro-ro.
    Cargo,
    /// Anything else (tugs, passenger, unknown).
    Other,
}

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, north positive.
    pub lat: f64,
    /// Longitude in decimal degrees, east positive.
    pub lon: f64,
}

/// Evidence attached to a record: where a fact came from and how much to
/// trust it. Many source references may back a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Short source name, e.g. "gov-trade" or "newswire".
    pub name: String,
    /// URL of the upstream document or API call.
    pub url: String,
    /// When the source published the underlying fact, if known.
    pub published_at: Option<DateTime<Utc>>,
    /// Trust level of the source.
    pub reliability: Reliability,
}

impl SourceRef {
    /// Convenience constructor with no publication timestamp.
    pub fn new(name: impl Into<String>, url: impl Into<String>, reliability: Reliability) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            published_at: None,
            reliability,
        }
    }
}

/// A port profile with its latest congestion snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Stable identifier, typically the UN/LOCODE (e.g. "NLRTM").
    pub id: String,
    /// Human-readable port name.
    pub name: String,
    /// ISO country code or name.
    pub country: String,
    /// Trade region bucket, e.g. "north-europe".
    pub region: Option<String>,
    /// Port position.
    pub coordinates: Option<Coordinates>,
    /// Current congestion level, if assessed.
    pub congestion: Option<Severity>,
    /// Vessels currently in port or at anchor.
    pub vessel_count: Option<u32>,
    /// Average berth wait in hours.
    pub avg_wait_hours: Option<f64>,
    /// When the snapshot was taken.
    pub updated_at: Option<DateTime<Utc>>,
    /// Evidence backing this record.
    pub sources: Vec<SourceRef>,
}

/// A trade-lane disruption event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionRecord {
    /// Stable identifier, typically a slug of the title.
    pub id: String,
    /// Headline, e.g. "Port strike at Rotterdam".
    pub title: String,
    /// Longer description, when the source provides one.
    pub summary: Option<String>,
    /// Affected trade region, when inferable.
    pub region: Option<String>,
    /// Assessed severity.
    pub severity: Severity,
    /// Lifecycle state.
    pub status: DisruptionStatus,
    /// When the event started or was first reported.
    pub started_at: Option<DateTime<Utc>>,
    /// Evidence backing this record.
    pub sources: Vec<SourceRef>,
}

/// A vessel position report with voyage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    /// Stable identifier, typically the IMO or MMSI number.
    pub id: String,
    /// Vessel name.
    pub name: String,
    /// Classification.
    pub kind: VesselKind,
    /// Flag state, if known.
    pub flag: Option<String>,
    /// Last reported position.
    pub position: Option<Coordinates>,
    /// Speed over ground in knots.
    pub speed_knots: Option<f64>,
    /// Heading in degrees true.
    pub heading: Option<f64>,
    /// Declared destination, as reported.
    pub destination: Option<String>,
    /// Estimated time of arrival.
    pub eta: Option<DateTime<Utc>>,
    /// When the position was reported.
    pub updated_at: Option<DateTime<Utc>>,
    /// Evidence backing this record.
    pub sources: Vec<SourceRef>,
}

/// One tariff line: an HS code, an optional partner, and a rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffRecord {
    /// Stable identifier, typically "{hs_code}:{partner}".
    pub id: String,
    /// Harmonized System code, e.g. "8517.62".
    pub hs_code: String,
    /// Free-text description of the tariff line.
    pub description: String,
    /// Trading partner the rate applies to; `None` means MFN/erga omnes.
    pub partner: Option<String>,
    /// Ad valorem rate in percent.
    pub rate_percent: Option<Decimal>,
    /// Date the rate takes (or took) effect.
    pub effective_date: Option<NaiveDate>,
    /// Evidence backing this record.
    pub sources: Vec<SourceRef>,
}

/// A tagged record of any entity kind, for kind-agnostic call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntityRecord {
    /// A port profile.
    Port(PortRecord),
    /// A disruption event.
    Disruption(DisruptionRecord),
    /// A vessel report.
    Vessel(VesselRecord),
    /// A tariff line.
    Tariff(TariffRecord),
}

impl EntityRecord {
    /// The record's identifier, unique within its kind.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Port(r) => &r.id,
            Self::Disruption(r) => &r.id,
            Self::Vessel(r) => &r.id,
            Self::Tariff(r) => &r.id,
        }
    }

    /// The entity kind of this record.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Port(_) => EntityKind::Port,
            Self::Disruption(_) => EntityKind::Disruption,
            Self::Vessel(_) => EntityKind::Vessel,
            Self::Tariff(_) => EntityKind::Tariff,
        }
    }

    /// Evidence backing this record.
    #[must_use]
    pub fn sources(&self) -> &[SourceRef] {
        match self {
            Self::Port(r) => &r.sources,
            Self::Disruption(r) => &r.sources,
            Self::Vessel(r) => &r.sources,
            Self::Tariff(r) => &r.sources,
        }
    }
}
