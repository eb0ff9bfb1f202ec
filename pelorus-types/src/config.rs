//! Configuration types shared across the orchestrator and connectors.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Severity};

/// TTL and capacity tables for the per-kind caches.
///
/// TTLs are expressed in milliseconds. A TTL of `0` disables caching for
/// that kind entirely. Kinds without an explicit entry use the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Fallback TTL for kinds without an explicit entry.
    pub default_ttl_ms: u64,
    /// Fallback live-entry capacity for kinds without an explicit entry.
    pub default_capacity: usize,
    /// Per-kind TTL overrides in milliseconds.
    pub per_kind_ttl_ms: HashMap<EntityKind, u64>,
    /// Per-kind capacity overrides.
    pub per_kind_capacity: HashMap<EntityKind, usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        // Defaults reflect how fast each feed actually moves: vessel
        // positions churn in minutes, tariff schedules in months.
        let per_kind_ttl_ms = HashMap::from([
            (EntityKind::Port, 30 * 60 * 1_000),
            (EntityKind::Disruption, 5 * 60 * 1_000),
            (EntityKind::Vessel, 2 * 60 * 1_000),
            (EntityKind::Tariff, 60 * 60 * 1_000),
        ]);
        Self {
            default_ttl_ms: 5 * 60 * 1_000,
            default_capacity: 64,
            per_kind_ttl_ms,
            per_kind_capacity: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Resolve the TTL for a kind. `None` means caching is disabled.
    #[must_use]
    pub fn ttl_for(&self, kind: EntityKind) -> Option<Duration> {
        let ms = self
            .per_kind_ttl_ms
            .get(&kind)
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Resolve the live-entry capacity for a kind.
    #[must_use]
    pub fn capacity_for(&self, kind: EntityKind) -> usize {
        self.per_kind_capacity
            .get(&kind)
            .copied()
            .unwrap_or(self.default_capacity)
    }
}

/// Bounded-retry configuration with fixed or exponential backoff.
///
/// Only transient failures are retried; error classification is the
/// responsibility of [`crate::FeedError::is_transient`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Ceiling for any computed delay, in milliseconds.
    pub max_delay_ms: u64,
    /// Double the delay after each failed attempt.
    pub exponential: bool,
    /// Random jitter percentage [0, 100] added to each delay.
    pub jitter_percent: u8,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 250,
            max_delay_ms: 10_000,
            exponential: true,
            jitter_percent: 20,
        }
    }
}

/// Weight table for the relevance/quality score.
///
/// The original call sites used slightly different literals for the same
/// purpose; this table is the single tunable surface replacing them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the completeness fraction.
    pub completeness: f64,
    /// Weight of maximum freshness (age under one day).
    pub freshness: f64,
    /// Weight of full source corroboration (at or above the cap).
    pub corroboration: f64,
    /// Source count at which corroboration saturates.
    pub corroboration_cap: u32,
    /// Additive weight for critical severity.
    pub severity_critical: f64,
    /// Additive weight for high severity.
    pub severity_high: f64,
    /// Additive weight for medium severity.
    pub severity_medium: f64,
    /// Additive weight for low severity.
    pub severity_low: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completeness: 25.0,
            freshness: 30.0,
            corroboration: 20.0,
            corroboration_cap: 3,
            severity_critical: 25.0,
            severity_high: 15.0,
            severity_medium: 8.0,
            severity_low: 3.0,
        }
    }
}

impl ScoreWeights {
    /// Additive weight for a severity level.
    #[must_use]
    pub const fn severity_weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.severity_critical,
            Severity::High => self.severity_high,
            Severity::Medium => self.severity_medium,
            Severity::Low => self.severity_low,
        }
    }
}

/// Envelope format a transport proxy wraps payloads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyEnvelope {
    /// The response body is the payload itself.
    Raw,
    /// JSON object with a `contents` string field holding the raw body.
    Contents,
    /// JSON object with an `items` array of pre-parsed records.
    Items,
}

/// One alternate transport proxy, tried in list order after the direct
/// request fails. `{url}` in the template is replaced with the
/// percent-encoded target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyEndpoint {
    /// Short name for logs.
    pub name: String,
    /// URL template containing a `{url}` placeholder.
    pub template: String,
    /// Envelope format this proxy wraps payloads in.
    pub envelope: ProxyEnvelope,
}

/// Configuration for the fetch-with-fallback transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Whole-request timeout per attempt, in milliseconds.
    pub request_timeout_ms: u64,
    /// Ordered proxy list; order defines fallback priority.
    pub proxies: Vec<ProxyEndpoint>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 5_000,
            request_timeout_ms: 10_000,
            proxies: vec![
                ProxyEndpoint {
                    name: "allorigins".into(),
                    template: "https://api.allorigins.win/get?url={url}".into(),
                    envelope: ProxyEnvelope::Contents,
                },
                ProxyEndpoint {
                    name: "rss2json".into(),
                    template: "https://api.rss2json.com/v1/api.json?rss_url={url}".into(),
                    envelope: ProxyEnvelope::Items,
                },
            ],
        }
    }
}
