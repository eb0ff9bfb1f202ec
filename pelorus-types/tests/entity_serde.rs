use chrono::{TimeZone, Utc};
use pelorus_types::{
    DisruptionRecord, DisruptionStatus, EntityKind, EntityRecord, Reliability, Severity, SourceRef,
};

#[test]
fn severity_orders_ascending() {
    assert!(Severity::Critical > Severity::High);
    assert!(Severity::High > Severity::Medium);
    assert!(Severity::Medium > Severity::Low);
}

#[test]
fn severity_serde_uses_lowercase_labels() {
    assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
    let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(parsed, Severity::Medium);
}

#[test]
fn entity_kind_labels_are_stable() {
    assert_eq!(EntityKind::Port.as_str(), "port");
    assert_eq!(EntityKind::Disruption.to_string(), "disruption");
    assert_eq!(serde_json::to_string(&EntityKind::Tariff).unwrap(), "\"tariff\"");
}

#[test]
fn entity_record_round_trips_with_kind_tag() {
    let record = EntityRecord::Disruption(DisruptionRecord {
        id: "suez-grounding".into(),
        title: "Container ship aground in Suez Canal".into(),
        summary: None,
        region: Some("red-sea".into()),
        severity: Severity::Critical,
        status: DisruptionStatus::Active,
        started_at: Some(Utc.with_ymd_and_hms(2024, 3, 23, 6, 0, 0).unwrap()),
        sources: vec![SourceRef::new(
            "newswire",
            "https://example.com/suez",
            Reliability::Medium,
        )],
    });

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["kind"], "disruption");
    assert_eq!(json["severity"], "critical");

    let back: EntityRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.kind(), EntityKind::Disruption);
    assert_eq!(back.id(), "suez-grounding");
}

#[test]
fn projection_reliability_survives_round_trip() {
    let source = SourceRef::new("synthetic-ais", "synthetic://ais", Reliability::Projection);
    let json = serde_json::to_string(&source).unwrap();
    assert!(json.contains("\"projection\""));
    let back: SourceRef = serde_json::from_str(&json).unwrap();
    assert_eq!(back.reliability, Reliability::Projection);
}
