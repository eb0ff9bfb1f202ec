use std::sync::Arc;

use pelorus::{EntityKind, FeedError, Pelorus};
use pelorus_mock::MockConnector;
use pelorus_mock::dynamic::DynamicMockConnector;

#[test]
fn build_without_connectors_is_an_invalid_argument() {
    let err = Pelorus::builder().build().unwrap_err();
    assert!(matches!(err, FeedError::InvalidArg(_)));
}

#[tokio::test]
async fn unknown_priority_keys_are_dropped_at_build() {
    let registered = Arc::new(MockConnector::new());
    let (unregistered, _ctl) = DynamicMockConnector::new("ghost");

    // "ghost" is referenced in the preference list but never registered;
    // build must succeed and simply ignore it.
    let pelorus = Pelorus::builder()
        .with_connector(registered.clone())
        .prefer_for_kind(EntityKind::Disruption, &[unregistered, registered])
        .build()
        .unwrap();

    let records = pelorus
        .disruptions(&pelorus::DisruptionRequest::default())
        .await;
    assert!(!records.is_empty(), "fixture mock still serves the request");
}

#[tokio::test]
async fn registration_order_is_the_default_priority() {
    let (first, _a) = DynamicMockConnector::new("first");
    let (second, _b) = DynamicMockConnector::new("second");
    let pelorus = Pelorus::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    // Smoke check: both registered, aggregation runs without priorities.
    let records = pelorus.aggregate(EntityKind::Vessel, Some(3)).await;
    assert!(records.is_empty(), "dynamic mocks default to empty batches");
}
