use chrono::{TimeZone, Utc};
use pelorus_core::{Coordinates, PortRecord, Reliability, Severity, SourceRef};

pub fn all() -> Vec<PortRecord> {
    vec![
        p(
            "NLRTM",
            "Rotterdam",
            "NL",
            "north-europe",
            51.95,
            4.14,
            Severity::Medium,
            412,
            18.5,
        ),
        p(
            "SGSIN",
            "Singapore",
            "SG",
            "southeast-asia",
            1.26,
            103.84,
            Severity::High,
            875,
            26.0,
        ),
        p(
            "CNSHA",
            "Shanghai",
            "CN",
            "east-asia",
            31.23,
            121.49,
            Severity::High,
            1043,
            31.2,
        ),
        p(
            "USLAX",
            "Los Angeles",
            "US",
            "north-america-west",
            33.73,
            -118.26,
            Severity::Low,
            238,
            9.4,
        ),
        p(
            "EGPSD",
            "Port Said",
            "EG",
            "red-sea",
            31.26,
            32.3,
            Severity::Critical,
            156,
            48.0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn p(
    id: &str,
    name: &str,
    country: &str,
    region: &str,
    lat: f64,
    lon: f64,
    congestion: Severity,
    vessel_count: u32,
    avg_wait_hours: f64,
) -> PortRecord {
    PortRecord {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        region: Some(region.to_string()),
        coordinates: Some(Coordinates { lat, lon }),
        congestion: Some(congestion),
        vessel_count: Some(vessel_count),
        avg_wait_hours: Some(avg_wait_hours),
        updated_at: Some(Utc.with_ymd_and_hms(2026, 1, 15, 6, 0, 0).unwrap()),
        sources: vec![SourceRef::new(
            "pelorus-mock",
            format!("mock://ports/{id}"),
            Reliability::High,
        )],
    }
}
