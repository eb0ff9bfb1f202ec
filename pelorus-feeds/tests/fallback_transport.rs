use httpmock::prelude::*;
use serde_json::json;

use pelorus_core::{FallbackConfig, FeedError, ProxyEndpoint, ProxyEnvelope};
use pelorus_feeds::FallbackClient;

fn cfg(proxies: Vec<ProxyEndpoint>) -> FallbackConfig {
    FallbackConfig {
        connect_timeout_ms: 1_000,
        request_timeout_ms: 1_000,
        proxies,
    }
}

fn proxy(server: &MockServer, path: &str, envelope: ProxyEnvelope) -> ProxyEndpoint {
    ProxyEndpoint {
        name: path.trim_start_matches('/').to_string(),
        template: format!("{}?target={{url}}", server.url(path)),
        envelope,
    }
}

#[tokio::test]
async fn direct_success_makes_no_proxy_attempts() {
    let server = MockServer::start_async().await;
    let direct = server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(200).json_body(json!({"ports": []}));
        })
        .await;
    let proxy_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy1");
            then.status(200).json_body(json!({"contents": "{}"}));
        })
        .await;

    let client = FallbackClient::new(cfg(vec![proxy(
        &server,
        "/proxy1",
        ProxyEnvelope::Contents,
    )]))
    .unwrap();

    let out = client.fetch_json(&server.url("/feed")).await.unwrap();
    assert!(out.get("ports").is_some());
    assert_eq!(direct.hits_async().await, 1);
    assert_eq!(proxy_mock.hits_async().await, 0);
}

#[tokio::test]
async fn failing_attempts_fall_through_in_order_and_stop_at_first_success() {
    let server = MockServer::start_async().await;
    let direct = server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(500);
        })
        .await;
    let proxy1 = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy1");
            then.status(200)
                .json_body(json!({"contents": "{\"items\": 3}"}));
        })
        .await;
    let proxy2 = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy2");
            then.status(200).json_body(json!({"contents": "{}"}));
        })
        .await;

    let client = FallbackClient::new(cfg(vec![
        proxy(&server, "/proxy1", ProxyEnvelope::Contents),
        proxy(&server, "/proxy2", ProxyEnvelope::Contents),
    ]))
    .unwrap();

    let out = client.fetch_json(&server.url("/feed")).await.unwrap();
    assert_eq!(out["items"], 3);
    assert_eq!(direct.hits_async().await, 1);
    assert_eq!(proxy1.hits_async().await, 1);
    assert_eq!(proxy2.hits_async().await, 0, "no attempts beyond the first success");
}

#[tokio::test]
async fn ok_status_with_error_payload_is_not_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(404);
        })
        .await;
    // 200 with an error inside the envelope: must be treated as a failure.
    let bad_proxy = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy1");
            then.status(200)
                .json_body(json!({"status": "error", "message": "quota exceeded"}));
        })
        .await;
    let good_proxy = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy2");
            then.status(200)
                .json_body(json!({"status": "ok", "items": [{"title": "x"}]}));
        })
        .await;

    let client = FallbackClient::new(cfg(vec![
        proxy(&server, "/proxy1", ProxyEnvelope::Items),
        proxy(&server, "/proxy2", ProxyEnvelope::Items),
    ]))
    .unwrap();

    let out = client.fetch_json(&server.url("/feed")).await.unwrap();
    assert_eq!(out.as_array().unwrap().len(), 1);
    assert_eq!(bad_proxy.hits_async().await, 1);
    assert_eq!(good_proxy.hits_async().await, 1);
}

#[tokio::test]
async fn malformed_direct_body_falls_back_to_proxy() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(200).body("<rss version=\"2.0\"></rss>");
        })
        .await;
    let items_proxy = server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy1");
            then.status(200)
                .json_body(json!({"status": "ok", "items": [{"title": "Port strike"}]}));
        })
        .await;

    let client = FallbackClient::new(cfg(vec![proxy(&server, "/proxy1", ProxyEnvelope::Items)]))
        .unwrap();

    let out = client.fetch_json(&server.url("/feed")).await.unwrap();
    assert_eq!(out[0]["title"], "Port strike");
    assert_eq!(items_proxy.hits_async().await, 1);
}

#[tokio::test]
async fn exhaustion_yields_all_sources_exhausted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(502);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/proxy1");
            then.status(503);
        })
        .await;

    let client = FallbackClient::new(cfg(vec![proxy(&server, "/proxy1", ProxyEnvelope::Raw)]))
        .unwrap();

    let err = client.fetch_json(&server.url("/feed")).await.unwrap_err();
    assert!(matches!(err, FeedError::AllSourcesExhausted { .. }));
    assert!(err.is_transient(), "exhaustion is a retryable condition");
}

#[tokio::test]
async fn proxy_template_receives_encoded_target() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed");
            then.status(500);
        })
        .await;
    let target = server.url("/feed");
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    let strict_proxy = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/proxy1")
                .query_param("target", target.clone());
            then.status(200).json_body(json!({"contents": "[]"}));
        })
        .await;

    let client = FallbackClient::new(cfg(vec![ProxyEndpoint {
        name: "strict".into(),
        template: format!("{}?target={}", server.url("/proxy1"), "{url}"),
        envelope: ProxyEnvelope::Contents,
    }]))
    .unwrap();

    let out = client.fetch_json(&target).await.unwrap();
    assert!(out.as_array().unwrap().is_empty());
    assert_eq!(strict_proxy.hits_async().await, 1);
    assert!(!encoded.contains("://"), "target was percent-encoded");
}
