use std::time::Duration;

use serde_json::Value;

use pelorus_core::{FallbackConfig, FeedError, ProxyEndpoint, ProxyEnvelope};

/// A resilient JSON fetch primitive.
///
/// Attempts, in order: the direct request, then each configured proxy
/// with the target URL substituted into its template. The first attempt
/// whose response has a success status *and* unwraps to a structurally
/// valid payload wins; later proxies are not tried. When every attempt
/// fails the caller gets [`FeedError::AllSourcesExhausted`], which must
/// be treated as "no data", not as a fatal error.
pub struct FallbackClient {
    http: reqwest::Client,
    cfg: FallbackConfig,
}

impl FallbackClient {
    /// Build a client from the transport configuration.
    ///
    /// Connect and whole-request timeouts are set on the HTTP client so
    /// every attempt is explicitly bounded.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn new(cfg: FallbackConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()
            .map_err(|e| FeedError::transport(e.to_string()))?;
        Ok(Self { http, cfg })
    }

    /// Build a client with the default proxy chain.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn new_default() -> Result<Self, FeedError> {
        Self::new(FallbackConfig::default())
    }

    /// Fetch `target` as JSON, falling back through the proxy chain.
    ///
    /// # Errors
    /// Returns `FeedError::AllSourcesExhausted` once the direct request
    /// and every proxy have failed.
    pub async fn fetch_json(&self, target: &str) -> Result<Value, FeedError> {
        match self.attempt(target, None).await {
            Ok(v) => return Ok(v),
            Err(e) => {
                tracing::debug!(url = target, error = %e, "direct fetch failed");
            }
        }

        for proxy in &self.cfg.proxies {
            let proxied = proxy.template.replace("{url}", &percent_encode(target));
            match self.attempt(&proxied, Some(proxy)).await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    tracing::debug!(url = target, proxy = %proxy.name, error = %e, "proxy fetch failed");
                }
            }
        }

        tracing::warn!(
            url = target,
            proxies = self.cfg.proxies.len(),
            "all transports exhausted"
        );
        Err(FeedError::exhausted(target))
    }

    async fn attempt(&self, url: &str, proxy: Option<&ProxyEndpoint>) -> Result<Value, FeedError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FeedError::transport(format!("upstream status {status}")));
        }
        if !status.is_success() {
            return Err(FeedError::InvalidArg(format!(
                "upstream rejected request: status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::transport(e.to_string()))?;

        let envelope = proxy.map_or(ProxyEnvelope::Raw, |p| p.envelope);
        unwrap_envelope(&body, envelope)
    }
}

/// Unwrap a response body according to the transport's envelope format,
/// validating the payload shape rather than trusting the status code.
/// Proxies routinely answer 200 with an error payload inside.
fn unwrap_envelope(body: &str, envelope: ProxyEnvelope) -> Result<Value, FeedError> {
    match envelope {
        ProxyEnvelope::Raw => validate_payload(parse_json(body)?),
        ProxyEnvelope::Contents => {
            let outer = parse_json(body)?;
            let contents = outer
                .get("contents")
                .and_then(Value::as_str)
                .ok_or_else(|| FeedError::Data("proxy envelope missing contents".into()))?;
            if contents.trim().is_empty() {
                return Err(FeedError::Data("proxy envelope contents empty".into()));
            }
            validate_payload(parse_json(contents)?)
        }
        ProxyEnvelope::Items => {
            let outer = parse_json(body)?;
            if let Some(status) = outer.get("status").and_then(Value::as_str)
                && status != "ok"
            {
                return Err(FeedError::Data(format!("proxy reported status {status}")));
            }
            let items = outer
                .get("items")
                .and_then(Value::as_array)
                .ok_or_else(|| FeedError::Data("proxy envelope missing items array".into()))?;
            Ok(Value::Array(items.clone()))
        }
    }
}

fn parse_json(body: &str) -> Result<Value, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::Data(format!("invalid JSON: {e}")))
}

fn validate_payload(payload: Value) -> Result<Value, FeedError> {
    if payload.is_object() || payload.is_array() {
        Ok(payload)
    } else {
        Err(FeedError::Data("payload is not a JSON object or array".into()))
    }
}

fn percent_encode(target: &str) -> String {
    url::form_urlencoded::byte_serialize(target.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_envelope_rejects_missing_field() {
        let err = unwrap_envelope(r#"{"status":{"http_code":200}}"#, ProxyEnvelope::Contents)
            .unwrap_err();
        assert!(matches!(err, FeedError::Data(_)));
    }

    #[test]
    fn contents_envelope_parses_inner_body() {
        let out = unwrap_envelope(
            r#"{"contents":"{\"ports\":[]}"}"#,
            ProxyEnvelope::Contents,
        )
        .unwrap();
        assert!(out.get("ports").is_some());
    }

    #[test]
    fn items_envelope_rejects_error_status() {
        let err = unwrap_envelope(
            r#"{"status":"error","items":[]}"#,
            ProxyEnvelope::Items,
        )
        .unwrap_err();
        assert!(matches!(err, FeedError::Data(_)));
    }

    #[test]
    fn raw_scalar_payload_is_rejected() {
        let err = unwrap_envelope("42", ProxyEnvelope::Raw).unwrap_err();
        assert!(matches!(err, FeedError::Data(_)));
    }

    #[test]
    fn target_is_percent_encoded_into_templates() {
        let encoded = percent_encode("https://example.com/feed?a=1&b=2");
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('?'));
    }
}
