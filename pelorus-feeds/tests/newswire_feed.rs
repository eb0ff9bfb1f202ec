use httpmock::prelude::*;
use serde_json::json;

use pelorus_core::connector::FeedConnector;
use pelorus_core::{
    DisruptionRequest, FallbackConfig, FeedError, ProxyEndpoint, ProxyEnvelope, Reliability,
    Severity,
};
use pelorus_feeds::NewsWireConnector;

fn items_proxy_cfg(server: &MockServer) -> FallbackConfig {
    FallbackConfig {
        connect_timeout_ms: 1_000,
        request_timeout_ms: 1_000,
        proxies: vec![ProxyEndpoint {
            name: "rss-proxy".into(),
            template: format!("{}?rss_url={}", server.url("/parse"), "{url}"),
            envelope: ProxyEnvelope::Items,
        }],
    }
}

#[tokio::test]
async fn rss_feed_is_classified_through_the_items_proxy() {
    let server = MockServer::start_async().await;
    // The feed itself serves XML: the direct attempt fails to parse and
    // the item-parsing proxy takes over.
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed.rss");
            then.status(200).body("<rss version=\"2.0\"></rss>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/parse");
            then.status(200).json_body(json!({
                "status": "ok",
                "items": [
                    {
                        "title": "Port strike at Rotterdam enters second week",
                        "link": "https://example.com/strike",
                        "pubDate": "2026-01-12 08:30:00",
                        "description": "Terminals operating at half capacity."
                    },
                    {
                        "title": "Container volumes rise in Q4",
                        "link": "https://example.com/volumes",
                        "pubDate": "2026-01-11 10:00:00"
                    },
                    {
                        "title": "Suez Canal closed after grounding",
                        "link": "https://example.com/suez",
                        "pubDate": "2026-01-13 02:15:00"
                    }
                ]
            }));
        })
        .await;

    let connector = NewsWireConnector::with_feeds(
        vec![server.url("/feed.rss")],
        items_proxy_cfg(&server),
    )
    .unwrap();

    let records = connector
        .as_disruption_provider()
        .unwrap()
        .disruptions(&DisruptionRequest::default())
        .await
        .unwrap();

    // The plain market headline is filtered out.
    assert_eq!(records.len(), 2);
    let strike = records.iter().find(|r| r.title.contains("strike")).unwrap();
    assert_eq!(strike.severity, Severity::High);
    assert_eq!(strike.region.as_deref(), Some("north-europe"));
    assert_eq!(strike.sources[0].reliability, Reliability::Medium);
    assert!(strike.started_at.is_some());

    let suez = records.iter().find(|r| r.title.contains("Suez")).unwrap();
    assert_eq!(suez.severity, Severity::Critical);
}

#[tokio::test]
async fn min_severity_filter_drops_low_grade_items() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed.rss");
            then.status(200).body("not json");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/parse");
            then.status(200).json_body(json!({
                "status": "ok",
                "items": [
                    {"title": "Fog warning at Hamburg", "link": "https://example.com/fog"},
                    {"title": "Terminal blockade at Antwerp", "link": "https://example.com/blockade"}
                ]
            }));
        })
        .await;

    let connector = NewsWireConnector::with_feeds(
        vec![server.url("/feed.rss")],
        items_proxy_cfg(&server),
    )
    .unwrap();

    let records = connector
        .as_disruption_provider()
        .unwrap()
        .disruptions(&DisruptionRequest {
            min_severity: Some(Severity::High),
            limit: None,
        })
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert!(records[0].title.contains("blockade"));
}

#[tokio::test]
async fn connector_fails_only_when_every_feed_fails() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/down.rss");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/parse");
            then.status(503);
        })
        .await;

    let connector = NewsWireConnector::with_feeds(
        vec![server.url("/down.rss")],
        items_proxy_cfg(&server),
    )
    .unwrap();

    let err = connector
        .as_disruption_provider()
        .unwrap()
        .disruptions(&DisruptionRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::AllSourcesExhausted { .. }));
}
