use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use pelorus_core::connector::{DisruptionProvider, FeedConnector};
use pelorus_core::{
    ConnectorKey, DisruptionRecord, DisruptionRequest, DisruptionStatus, EntityKind,
    FallbackConfig, FeedError, Reliability, Severity, SourceRef, normalize_title,
};

use crate::client::FallbackClient;

/// Maritime news feeds polled by default. Feeds serve RSS/XML, which the
/// direct fetch cannot parse as JSON; the item-parsing proxy in the
/// fallback chain is what actually unwraps them.
const DEFAULT_FEEDS: &[&str] = &[
    "https://gcaptain.com/feed/",
    "https://www.maritime-executive.com/articles.rss",
];

// Keyword tables for the severity heuristic. Real news NLP is explicitly
// out of scope; headlines without a match are not disruptions.
const CRITICAL_KEYWORDS: &[&str] = &[
    "closure", "closed", "suspended", "attack", "aground", "grounding", "collision", "explosion",
    "blockade",
];
const HIGH_KEYWORDS: &[&str] = &[
    "strike", "congestion", "backlog", "typhoon", "hurricane", "drought", "diversion", "rerouting",
];
const MEDIUM_KEYWORDS: &[&str] = &[
    "delay", "restriction", "warning", "fog", "storm", "maintenance", "shortage",
];

const REGION_KEYWORDS: &[(&str, &str)] = &[
    ("suez", "red-sea"),
    ("red sea", "red-sea"),
    ("bab el-mandeb", "red-sea"),
    ("panama", "central-america"),
    ("rotterdam", "north-europe"),
    ("hamburg", "north-europe"),
    ("antwerp", "north-europe"),
    ("singapore", "southeast-asia"),
    ("malacca", "southeast-asia"),
    ("shanghai", "east-asia"),
    ("ningbo", "east-asia"),
    ("kaohsiung", "east-asia"),
    ("los angeles", "north-america-west"),
    ("long beach", "north-america-west"),
];

/// Connector that classifies maritime news headlines into disruption
/// events. One instance polls a fixed list of feeds; each feed failure is
/// tolerated independently as long as at least one feed yields items.
pub struct NewsWireConnector {
    client: FallbackClient,
    feeds: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    title: String,
    #[serde(default, alias = "link")]
    url: Option<String>,
    #[serde(default, alias = "pubDate")]
    published: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl NewsWireConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("newswire");

    /// Build with the default feed list and transport.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_feeds(
            DEFAULT_FEEDS.iter().map(|s| (*s).to_string()).collect(),
            FallbackConfig::default(),
        )
    }

    /// Build against custom feeds, e.g. a test server.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn with_feeds(feeds: Vec<String>, cfg: FallbackConfig) -> Result<Self, FeedError> {
        Ok(Self {
            client: FallbackClient::new(cfg)?,
            feeds,
        })
    }
}

impl FeedConnector for NewsWireConnector {
    fn name(&self) -> &'static str {
        "newswire"
    }
    fn vendor(&self) -> &'static str {
        "Maritime trade press"
    }
    fn supports_kind(&self, kind: EntityKind) -> bool {
        matches!(kind, EntityKind::Disruption)
    }
    fn as_disruption_provider(&self) -> Option<&dyn DisruptionProvider> {
        Some(self as &dyn DisruptionProvider)
    }
}

#[async_trait]
impl DisruptionProvider for NewsWireConnector {
    async fn disruptions(
        &self,
        req: &DisruptionRequest,
    ) -> Result<Vec<DisruptionRecord>, FeedError> {
        let mut records = Vec::new();
        let mut last_err: Option<FeedError> = None;
        let mut any_ok = false;

        for feed in &self.feeds {
            match self.client.fetch_json(feed).await {
                Ok(payload) => {
                    any_ok = true;
                    records.extend(classify_items(payload));
                }
                Err(e) => {
                    tracing::debug!(feed = %feed, error = %e, "news feed unavailable");
                    last_err = Some(e);
                }
            }
        }

        if !any_ok {
            return Err(last_err.unwrap_or_else(|| FeedError::Data("no feeds configured".into())));
        }

        if let Some(min) = req.min_severity {
            records.retain(|r| r.severity >= min);
        }
        Ok(records)
    }
}

fn classify_items(payload: Value) -> Vec<DisruptionRecord> {
    let items: Vec<WireItem> = match serde_json::from_value(payload) {
        Ok(items) => items,
        Err(e) => {
            tracing::debug!(error = %e, "feed items did not match expected shape");
            return Vec::new();
        }
    };
    items.into_iter().filter_map(classify).collect()
}

/// Turn one headline into a disruption record, or `None` when no severity
/// keyword matches (the headline is news, not a disruption).
fn classify(item: WireItem) -> Option<DisruptionRecord> {
    let haystack = format!(
        "{} {}",
        item.title.to_lowercase(),
        item.description.as_deref().unwrap_or("").to_lowercase()
    );

    let severity = severity_of(&haystack)?;
    let resolved = haystack.contains("resolved")
        || haystack.contains("reopen")
        || haystack.contains("lifted");
    let status = if resolved {
        DisruptionStatus::Resolved
    } else if severity >= Severity::High {
        DisruptionStatus::Active
    } else {
        DisruptionStatus::Monitoring
    };

    let published_at = item.published.as_deref().and_then(parse_pub_date);
    let url = item.url.clone().unwrap_or_default();

    Some(DisruptionRecord {
        id: normalize_title(&item.title),
        title: item.title,
        summary: item.description,
        region: region_of(&haystack),
        severity,
        status,
        started_at: published_at,
        sources: vec![SourceRef {
            name: "newswire".into(),
            url,
            published_at,
            reliability: Reliability::Medium,
        }],
    })
}

fn severity_of(haystack: &str) -> Option<Severity> {
    if CRITICAL_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        Some(Severity::Critical)
    } else if HIGH_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        Some(Severity::High)
    } else if MEDIUM_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        Some(Severity::Medium)
    } else {
        None
    }
}

fn region_of(haystack: &str) -> Option<String> {
    REGION_KEYWORDS
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, region)| (*region).to_string())
}

/// Feeds and proxies disagree on date formats; accept RFC 2822 (native
/// RSS), RFC 3339, and the proxy's naive "YYYY-MM-DD HH:MM:SS".
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> WireItem {
        WireItem {
            title: title.to_string(),
            url: Some("https://example.com/article".to_string()),
            published: Some("Mon, 12 Jan 2026 08:30:00 GMT".to_string()),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn keyword_severity_ladder() {
        let d = classify(item("Suez Canal closed to transits", "")).unwrap();
        assert_eq!(d.severity, Severity::Critical);
        assert_eq!(d.region.as_deref(), Some("red-sea"));
        assert_eq!(d.status, DisruptionStatus::Active);

        let d = classify(item("Fog warning at Rotterdam", "")).unwrap();
        assert_eq!(d.severity, Severity::Medium);
        assert_eq!(d.status, DisruptionStatus::Monitoring);
    }

    #[test]
    fn plain_news_is_not_a_disruption() {
        assert!(classify(item("Quarterly container volumes rise", "")).is_none());
    }

    #[test]
    fn reopened_events_are_marked_resolved() {
        let d = classify(item("Panama Canal restrictions lifted", "")).unwrap();
        assert_eq!(d.status, DisruptionStatus::Resolved);
    }

    #[test]
    fn pub_dates_parse_across_formats() {
        assert!(parse_pub_date("Mon, 12 Jan 2026 08:30:00 GMT").is_some());
        assert!(parse_pub_date("2026-01-12T08:30:00Z").is_some());
        assert!(parse_pub_date("2026-01-12 08:30:00").is_some());
        assert!(parse_pub_date("yesterday").is_none());
    }
}
