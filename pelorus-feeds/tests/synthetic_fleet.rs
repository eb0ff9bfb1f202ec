use pelorus_core::connector::FeedConnector;
use pelorus_core::{EntityKind, Reliability, VesselRequest};
use pelorus_feeds::SyntheticConnector;

#[tokio::test]
async fn same_seed_yields_the_same_fleet() {
    let a = SyntheticConnector::with_seed(42);
    let b = SyntheticConnector::with_seed(42);
    let req = VesselRequest::default();

    let fleet_a = a.as_vessel_provider().unwrap().vessels(&req).await.unwrap();
    let fleet_b = b.as_vessel_provider().unwrap().vessels(&req).await.unwrap();

    assert_eq!(fleet_a.len(), 25);
    let ids_a: Vec<&str> = fleet_a.iter().map(|v| v.id.as_str()).collect();
    let ids_b: Vec<&str> = fleet_b.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
    assert_eq!(fleet_a[0].name, fleet_b[0].name);
    assert_eq!(fleet_a[0].position, fleet_b[0].position);
}

#[tokio::test]
async fn different_seeds_yield_different_fleets() {
    let a = SyntheticConnector::with_seed(1);
    let b = SyntheticConnector::with_seed(2);
    let req = VesselRequest::default();

    let fleet_a = a.as_vessel_provider().unwrap().vessels(&req).await.unwrap();
    let fleet_b = b.as_vessel_provider().unwrap().vessels(&req).await.unwrap();
    assert_ne!(
        fleet_a.iter().map(|v| v.id.clone()).collect::<Vec<_>>(),
        fleet_b.iter().map(|v| v.id.clone()).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn every_record_is_tagged_as_projection() {
    let connector = SyntheticConnector::new().fleet_size(10);
    let fleet = connector
        .as_vessel_provider()
        .unwrap()
        .vessels(&VesselRequest::default())
        .await
        .unwrap();
    assert_eq!(fleet.len(), 10);
    for vessel in &fleet {
        assert!(
            vessel
                .sources
                .iter()
                .all(|s| s.reliability == Reliability::Projection),
            "synthetic data must be distinguishable from observations"
        );
    }
}

#[tokio::test]
async fn region_filter_restricts_lanes() {
    let connector = SyntheticConnector::with_seed(7).fleet_size(100);
    let fleet = connector
        .as_vessel_provider()
        .unwrap()
        .vessels(&VesselRequest {
            region: Some("red-sea".into()),
            limit: None,
        })
        .await
        .unwrap();
    assert!(!fleet.is_empty());
    for vessel in &fleet {
        let pos = vessel.position.unwrap();
        assert!((12.0..30.0).contains(&pos.lat));
        assert!((32.0..44.0).contains(&pos.lon));
    }
    assert!(connector.supports_kind(EntityKind::Vessel));
    assert!(!connector.supports_kind(EntityKind::Port));
}
