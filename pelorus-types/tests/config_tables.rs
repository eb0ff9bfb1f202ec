use std::time::Duration;

use pelorus_types::{CacheConfig, EntityKind, RetryConfig, ScoreWeights, Severity};

#[test]
fn default_ttls_match_feed_churn() {
    let cfg = CacheConfig::default();
    assert_eq!(cfg.ttl_for(EntityKind::Port), Some(Duration::from_secs(30 * 60)));
    assert_eq!(cfg.ttl_for(EntityKind::Disruption), Some(Duration::from_secs(5 * 60)));
    assert_eq!(cfg.ttl_for(EntityKind::Vessel), Some(Duration::from_secs(2 * 60)));
    assert_eq!(cfg.ttl_for(EntityKind::Tariff), Some(Duration::from_secs(60 * 60)));
}

#[test]
fn unknown_kind_falls_back_to_default_ttl() {
    let mut cfg = CacheConfig::default();
    cfg.per_kind_ttl_ms.clear();
    for kind in EntityKind::all() {
        assert_eq!(cfg.ttl_for(kind), Some(Duration::from_secs(5 * 60)));
    }
}

#[test]
fn zero_ttl_disables_caching() {
    let mut cfg = CacheConfig::default();
    cfg.per_kind_ttl_ms.insert(EntityKind::Vessel, 0);
    assert_eq!(cfg.ttl_for(EntityKind::Vessel), None);
}

#[test]
fn cache_config_round_trips() {
    let cfg = CacheConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: CacheConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ttl_for(EntityKind::Port), cfg.ttl_for(EntityKind::Port));
    assert_eq!(back.capacity_for(EntityKind::Port), cfg.capacity_for(EntityKind::Port));
}

#[test]
fn retry_defaults_are_bounded() {
    let cfg = RetryConfig::default();
    assert!(cfg.max_attempts >= 1);
    assert!(cfg.base_delay_ms <= cfg.max_delay_ms);
    assert!(cfg.jitter_percent <= 100);
}

#[test]
fn severity_weights_are_monotonic() {
    let w = ScoreWeights::default();
    assert!(w.severity_weight(Severity::Critical) >= w.severity_weight(Severity::High));
    assert!(w.severity_weight(Severity::High) >= w.severity_weight(Severity::Medium));
    assert!(w.severity_weight(Severity::Medium) >= w.severity_weight(Severity::Low));
}
