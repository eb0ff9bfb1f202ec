use httpmock::prelude::*;
use serde_json::json;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{
    EntityKind, FallbackConfig, PortRequest, Reliability, Severity, TariffRequest,
};
use pelorus_feeds::GovTradeConnector;

fn no_proxy_cfg() -> FallbackConfig {
    FallbackConfig {
        connect_timeout_ms: 1_000,
        request_timeout_ms: 1_000,
        proxies: vec![],
    }
}

#[tokio::test]
async fn maps_port_rows_with_high_reliability_sources() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/ports");
            then.status(200).json_body(json!({"results": [
                {
                    "locode": "NLRTM",
                    "name": "Rotterdam",
                    "country": "NL",
                    "region": "north-europe",
                    "latitude": 51.95,
                    "longitude": 4.14,
                    "congestion": "moderate",
                    "vessel_count": 402,
                    "avg_wait_hours": 17.0,
                    "updated": "2026-01-15T06:00:00Z"
                },
                {"id": "XXUNK", "name": "Unknown Harbor"}
            ]}));
        })
        .await;

    let connector = GovTradeConnector::with_base_url(server.base_url(), no_proxy_cfg()).unwrap();
    assert!(connector.supports_kind(EntityKind::Port));
    assert!(!connector.supports_kind(EntityKind::Vessel));

    let ports = connector
        .as_port_provider()
        .unwrap()
        .ports(&PortRequest::default())
        .await
        .unwrap();

    assert_eq!(ports.len(), 2);
    let rtm = &ports[0];
    assert_eq!(rtm.id, "NLRTM");
    assert_eq!(rtm.congestion, Some(Severity::Medium));
    assert_eq!(rtm.coordinates.unwrap().lat, 51.95);
    assert_eq!(rtm.sources[0].reliability, Reliability::High);

    // Sparse rows survive with empty optionals rather than failing the batch.
    let unk = &ports[1];
    assert!(unk.coordinates.is_none());
    assert!(unk.congestion.is_none());
}

#[tokio::test]
async fn region_filter_is_forwarded_upstream() {
    let server = MockServer::start_async().await;
    let filtered = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ports")
                .query_param("region", "east-asia");
            then.status(200).json_body(json!([]));
        })
        .await;

    let connector = GovTradeConnector::with_base_url(server.base_url(), no_proxy_cfg()).unwrap();
    let ports = connector
        .as_port_provider()
        .unwrap()
        .ports(&PortRequest {
            region: Some("east-asia".into()),
            limit: None,
        })
        .await
        .unwrap();
    assert!(ports.is_empty());
    assert_eq!(filtered.hits_async().await, 1);
}

#[tokio::test]
async fn maps_tariff_rows_including_mfn_fallback_ids() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tariff_rates");
            then.status(200).json_body(json!([
                {
                    "hs_code": "8517.62",
                    "description": "Data transmission machines",
                    "partner": "CN",
                    "rate_percent": 25.0,
                    "effective_date": "2025-09-27"
                },
                {"hs_code": "0406.90", "rate_percent": 10.0}
            ]));
        })
        .await;

    let connector = GovTradeConnector::with_base_url(server.base_url(), no_proxy_cfg()).unwrap();
    let tariffs = connector
        .as_tariff_provider()
        .unwrap()
        .tariffs(&TariffRequest::default())
        .await
        .unwrap();

    assert_eq!(tariffs[0].id, "8517.62:CN");
    assert_eq!(tariffs[0].rate_percent.unwrap().to_string(), "25");
    assert_eq!(tariffs[1].id, "0406.90:mfn");
    assert!(tariffs[1].partner.is_none());
}

#[tokio::test]
async fn malformed_rows_fail_the_call_as_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tariff_rates");
            then.status(200).json_body(json!({"unexpected": true}));
        })
        .await;

    let connector = GovTradeConnector::with_base_url(server.base_url(), no_proxy_cfg()).unwrap();
    let err = connector
        .as_tariff_provider()
        .unwrap()
        .tariffs(&TariffRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, pelorus_core::FeedError::Data(_)));
    assert!(!err.is_transient(), "malformed payloads are never retried");
}
