use chrono::{TimeZone, Utc};
use pelorus_core::{Coordinates, Reliability, SourceRef, VesselKind, VesselRecord};

pub fn all() -> Vec<VesselRecord> {
    vec![
        v(
            "9811000",
            "MSC GULSUN",
            VesselKind::Container,
            "PA",
            36.14,
            -5.35,
            17.2,
            254.0,
            "NLRTM",
        ),
        v(
            "9321483",
            "FRONT ALTAIR",
            VesselKind::Tanker,
            "MH",
            25.0,
            56.4,
            12.8,
            142.0,
            "SGSIN",
        ),
        v(
            "9595321",
            "BERGE EVEREST",
            VesselKind::BulkCarrier,
            "IM",
            -32.05,
            115.74,
            11.3,
            310.0,
            "CNSHA",
        ),
        v(
            "9074729",
            "ATLANTIC HERON",
            VesselKind::Cargo,
            "LR",
            49.4,
            -5.1,
            14.6,
            78.0,
            "USLAX",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn v(
    id: &str,
    name: &str,
    kind: VesselKind,
    flag: &str,
    lat: f64,
    lon: f64,
    speed_knots: f64,
    heading: f64,
    destination: &str,
) -> VesselRecord {
    VesselRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        flag: Some(flag.to_string()),
        position: Some(Coordinates { lat, lon }),
        speed_knots: Some(speed_knots),
        heading: Some(heading),
        destination: Some(destination.to_string()),
        eta: Some(Utc.with_ymd_and_hms(2026, 1, 22, 12, 0, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2026, 1, 15, 5, 45, 0).unwrap()),
        sources: vec![SourceRef::new(
            "pelorus-mock",
            format!("mock://vessels/{id}"),
            Reliability::High,
        )],
    }
}
