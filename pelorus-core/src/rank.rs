use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, NaiveTime, Utc};

use pelorus_types::{
    DisruptionRecord, EntityRecord, PortRecord, ScoreWeights, Severity, SourceRef, TariffRecord,
    VesselRecord,
};

/// A record that can be deduplicated and ranked by the aggregation
/// pipeline. Implemented for every entity record type.
pub trait Rankable {
    /// Collision key for deduplication: the normalized title for
    /// disruption-like records, the lowercased `id` elsewhere.
    fn dedup_key(&self) -> String;

    /// Fraction in `[0, 1]` of the record's optional informative fields
    /// that are populated.
    fn completeness(&self) -> f64;

    /// The date freshness is measured against, if the record carries one.
    fn event_date(&self) -> Option<DateTime<Utc>>;

    /// Severity contribution, for kinds that carry one.
    fn severity(&self) -> Option<Severity>;

    /// Evidence backing the record.
    fn sources(&self) -> &[SourceRef];
}

/// Lowercase `raw` and strip every non-alphanumeric character, so
/// "Port Strike at Rotterdam!" and "port-strike at rotterdam" collide.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Collapse records whose dedup keys collide, keeping the first
/// occurrence. Callers pass records in provider-priority order so the
/// highest-priority provider wins.
#[must_use]
pub fn dedup<R: Rankable>(records: Vec<R>) -> Vec<R> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect()
}

/// Deterministic relevance score: completeness, a freshness step
/// function, capped source corroboration, and a severity lookup, each
/// weighted by the [`ScoreWeights`] table.
#[must_use]
pub fn relevance_score<R: Rankable>(record: &R, weights: &ScoreWeights, now: DateTime<Utc>) -> f64 {
    let mut score = weights.completeness * record.completeness().clamp(0.0, 1.0);

    if let Some(date) = record.event_date() {
        let age_days = (now - date).num_days();
        score += if age_days < 1 {
            weights.freshness
        } else if age_days < 7 {
            weights.freshness * 0.5
        } else if age_days < 30 {
            weights.freshness * 0.2
        } else {
            0.0
        };
    }

    let count = u32::try_from(record.sources().len()).unwrap_or(u32::MAX);
    if count > 0 {
        let cap = weights.corroboration_cap.max(1);
        score += weights.corroboration * f64::from(count.min(cap)) / f64::from(cap);
    }

    if let Some(severity) = record.severity() {
        score += weights.severity_weight(severity);
    }

    score
}

/// Sort records by descending relevance (ties broken by most recent
/// event date) and keep the top `limit`.
#[must_use]
pub fn rank<R: Rankable>(
    records: Vec<R>,
    weights: &ScoreWeights,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Vec<R> {
    let mut scored: Vec<(f64, R)> = records
        .into_iter()
        .map(|r| (relevance_score(&r, weights, now), r))
        .collect();
    scored.sort_by(|(sa, ra), (sb, rb)| {
        sb.partial_cmp(sa)
            .unwrap_or(Ordering::Equal)
            .then_with(|| rb.event_date().cmp(&ra.event_date()))
    });
    let mut out: Vec<R> = scored.into_iter().map(|(_, r)| r).collect();
    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

impl Rankable for PortRecord {
    fn dedup_key(&self) -> String {
        self.id.trim().to_ascii_lowercase()
    }

    fn completeness(&self) -> f64 {
        let present = [
            self.region.is_some(),
            self.coordinates.is_some(),
            self.congestion.is_some(),
            self.vessel_count.is_some(),
            self.avg_wait_hours.is_some(),
            self.updated_at.is_some(),
        ];
        fraction(&present)
    }

    fn event_date(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn severity(&self) -> Option<Severity> {
        self.congestion
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }
}

impl Rankable for DisruptionRecord {
    fn dedup_key(&self) -> String {
        normalize_title(&self.title)
    }

    fn completeness(&self) -> f64 {
        let present = [
            self.summary.is_some(),
            self.region.is_some(),
            self.started_at.is_some(),
        ];
        fraction(&present)
    }

    fn event_date(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }
}

impl Rankable for VesselRecord {
    fn dedup_key(&self) -> String {
        self.id.trim().to_ascii_lowercase()
    }

    fn completeness(&self) -> f64 {
        let present = [
            self.flag.is_some(),
            self.position.is_some(),
            self.speed_knots.is_some(),
            self.heading.is_some(),
            self.destination.is_some(),
            self.eta.is_some(),
            self.updated_at.is_some(),
        ];
        fraction(&present)
    }

    fn event_date(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn severity(&self) -> Option<Severity> {
        None
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }
}

impl Rankable for TariffRecord {
    fn dedup_key(&self) -> String {
        self.id.trim().to_ascii_lowercase()
    }

    fn completeness(&self) -> f64 {
        let present = [
            self.partner.is_some(),
            self.rate_percent.is_some(),
            self.effective_date.is_some(),
        ];
        fraction(&present)
    }

    fn event_date(&self) -> Option<DateTime<Utc>> {
        self.effective_date
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    fn severity(&self) -> Option<Severity> {
        None
    }

    fn sources(&self) -> &[SourceRef] {
        &self.sources
    }
}

impl Rankable for EntityRecord {
    fn dedup_key(&self) -> String {
        match self {
            Self::Port(r) => r.dedup_key(),
            Self::Disruption(r) => r.dedup_key(),
            Self::Vessel(r) => r.dedup_key(),
            Self::Tariff(r) => r.dedup_key(),
        }
    }

    fn completeness(&self) -> f64 {
        match self {
            Self::Port(r) => r.completeness(),
            Self::Disruption(r) => r.completeness(),
            Self::Vessel(r) => r.completeness(),
            Self::Tariff(r) => r.completeness(),
        }
    }

    fn event_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Port(r) => r.event_date(),
            Self::Disruption(r) => r.event_date(),
            Self::Vessel(r) => r.event_date(),
            Self::Tariff(r) => r.event_date(),
        }
    }

    fn severity(&self) -> Option<Severity> {
        match self {
            Self::Port(r) => r.severity(),
            Self::Disruption(r) => r.severity(),
            Self::Vessel(r) => r.severity(),
            Self::Tariff(r) => r.severity(),
        }
    }

    fn sources(&self) -> &[SourceRef] {
        match self {
            Self::Port(r) => r.sources(),
            Self::Disruption(r) => r.sources(),
            Self::Vessel(r) => r.sources(),
            Self::Tariff(r) => r.sources(),
        }
    }
}

fn fraction(present: &[bool]) -> f64 {
    if present.is_empty() {
        return 1.0;
    }
    let populated = present.iter().filter(|p| **p).count();
    populated as f64 / present.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(
            normalize_title("Port Strike at Rotterdam!"),
            normalize_title("port-strike AT rotterdam")
        );
        assert_eq!(normalize_title("  "), "");
    }

    #[test]
    fn normalize_drops_non_ascii() {
        // Non-ASCII collapses away rather than producing distinct keys.
        assert_eq!(normalize_title("Malmö"), "malm");
    }
}
