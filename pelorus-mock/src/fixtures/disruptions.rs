use chrono::{TimeZone, Utc};
use pelorus_core::{
    DisruptionRecord, DisruptionStatus, Reliability, Severity, SourceRef, normalize_title,
};

pub fn all() -> Vec<DisruptionRecord> {
    vec![
        d(
            "Red Sea transits suspended after missile attacks",
            "Carriers divert around the Cape of Good Hope; add 10-14 days.",
            "red-sea",
            Severity::Critical,
            DisruptionStatus::Active,
            (2026, 1, 2),
        ),
        d(
            "Panama Canal draft restrictions extended",
            "Gatun Lake levels keep daily transits capped.",
            "central-america",
            Severity::High,
            DisruptionStatus::Active,
            (2025, 11, 20),
        ),
        d(
            "Port strike at Rotterdam",
            "Lashers walk out over automation dispute; terminals at reduced capacity.",
            "north-europe",
            Severity::High,
            DisruptionStatus::Active,
            (2026, 1, 12),
        ),
        d(
            "Typhoon closes Kaohsiung anchorage",
            "Anchorage closed ahead of landfall; reopening expected within 48h.",
            "east-asia",
            Severity::Medium,
            DisruptionStatus::Monitoring,
            (2026, 1, 14),
        ),
        d(
            "Fog delays at Santos",
            "Pilot boarding suspended during morning hours.",
            "south-america-east",
            Severity::Low,
            DisruptionStatus::Resolved,
            (2026, 1, 8),
        ),
    ]
}

fn d(
    title: &str,
    summary: &str,
    region: &str,
    severity: Severity,
    status: DisruptionStatus,
    started: (i32, u32, u32),
) -> DisruptionRecord {
    DisruptionRecord {
        id: normalize_title(title),
        title: title.to_string(),
        summary: Some(summary.to_string()),
        region: Some(region.to_string()),
        severity,
        status,
        started_at: Some(
            Utc.with_ymd_and_hms(started.0, started.1, started.2, 0, 0, 0)
                .unwrap(),
        ),
        sources: vec![SourceRef::new(
            "pelorus-mock",
            format!("mock://disruptions/{}", normalize_title(title)),
            Reliability::High,
        )],
    }
}
