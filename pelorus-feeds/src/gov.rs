use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use pelorus_core::connector::{FeedConnector, PortProvider, TariffProvider};
use pelorus_core::{
    ConnectorKey, Coordinates, EntityKind, FallbackConfig, FeedError, PortRecord, PortRequest,
    Reliability, Severity, SourceRef, TariffRecord, TariffRequest,
};

use crate::client::FallbackClient;

const DEFAULT_BASE_URL: &str = "https://data.trade.gov/v1";

/// Connector for a government trade data API: port profiles with
/// congestion snapshots and tariff lines by HS code.
pub struct GovTradeConnector {
    client: FallbackClient,
    base_url: String,
}

impl GovTradeConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("gov-trade");

    /// Build against the production base URL with the default transport.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_base_url(DEFAULT_BASE_URL, FallbackConfig::default())
    }

    /// Build against a custom base URL, e.g. a staging host or a test
    /// server.
    ///
    /// # Errors
    /// Returns `FeedError::Transport` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>, cfg: FallbackConfig) -> Result<Self, FeedError> {
        Ok(Self {
            client: FallbackClient::new(cfg)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn source(&self, url: &str, published_at: Option<DateTime<Utc>>) -> SourceRef {
        SourceRef {
            name: "gov-trade".into(),
            url: url.to_string(),
            published_at,
            reliability: Reliability::High,
        }
    }
}

impl FeedConnector for GovTradeConnector {
    fn name(&self) -> &'static str {
        "gov-trade"
    }
    fn vendor(&self) -> &'static str {
        "Government trade data"
    }
    fn supports_kind(&self, kind: EntityKind) -> bool {
        matches!(kind, EntityKind::Port | EntityKind::Tariff)
    }
    fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        Some(self as &dyn PortProvider)
    }
    fn as_tariff_provider(&self) -> Option<&dyn TariffProvider> {
        Some(self as &dyn TariffProvider)
    }
}

/// Wire shape of one port row. The API is lenient about optional columns,
/// so everything beyond the identifier is optional.
#[derive(Debug, Deserialize)]
struct WirePort {
    #[serde(alias = "locode")]
    id: String,
    name: String,
    country: Option<String>,
    region: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    congestion: Option<String>,
    vessel_count: Option<u32>,
    avg_wait_hours: Option<f64>,
    updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct WireTariff {
    hs_code: String,
    description: Option<String>,
    partner: Option<String>,
    rate_percent: Option<f64>,
    effective_date: Option<NaiveDate>,
}

#[async_trait]
impl PortProvider for GovTradeConnector {
    async fn ports(&self, req: &PortRequest) -> Result<Vec<PortRecord>, FeedError> {
        let mut url = format!("{}/ports", self.base_url);
        if let Some(region) = &req.region {
            url.push_str("?region=");
            url.push_str(region);
        }
        let payload = self.client.fetch_json(&url).await?;
        let rows: Vec<WirePort> = rows_from(payload)?;
        Ok(rows
            .into_iter()
            .map(|w| {
                let updated = w.updated;
                PortRecord {
                    sources: vec![self.source(&url, updated)],
                    id: w.id,
                    name: w.name,
                    country: w.country.unwrap_or_default(),
                    region: w.region,
                    coordinates: match (w.latitude, w.longitude) {
                        (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
                        _ => None,
                    },
                    congestion: w.congestion.as_deref().and_then(parse_severity),
                    vessel_count: w.vessel_count,
                    avg_wait_hours: w.avg_wait_hours,
                    updated_at: updated,
                }
            })
            .collect())
    }
}

#[async_trait]
impl TariffProvider for GovTradeConnector {
    async fn tariffs(&self, req: &TariffRequest) -> Result<Vec<TariffRecord>, FeedError> {
        let mut url = format!("{}/tariff_rates", self.base_url);
        if let Some(partner) = &req.partner {
            url.push_str("?partner=");
            url.push_str(partner);
        }
        let payload = self.client.fetch_json(&url).await?;
        let rows: Vec<WireTariff> = rows_from(payload)?;
        Ok(rows
            .into_iter()
            .map(|w| {
                let partner_label = w.partner.as_deref().unwrap_or("mfn").to_string();
                TariffRecord {
                    id: format!("{}:{}", w.hs_code, partner_label),
                    hs_code: w.hs_code,
                    description: w.description.unwrap_or_default(),
                    partner: w.partner,
                    rate_percent: w.rate_percent.and_then(Decimal::from_f64_retain),
                    effective_date: w.effective_date,
                    sources: vec![self.source(&url, None)],
                }
            })
            .collect())
    }
}

/// Accept both a bare array and the `{"results": [...]}` envelope the API
/// uses on paginated endpoints.
fn rows_from<T: serde::de::DeserializeOwned>(payload: Value) -> Result<Vec<T>, FeedError> {
    let rows = match payload {
        Value::Array(rows) => Value::Array(rows),
        Value::Object(mut obj) => obj
            .remove("results")
            .ok_or_else(|| FeedError::Data("response missing results array".into()))?,
        other => {
            return Err(FeedError::Data(format!(
                "unexpected payload shape: {other}"
            )));
        }
    };
    serde_json::from_value(rows).map_err(|e| FeedError::Data(format!("malformed row: {e}")))
}

fn parse_severity(raw: &str) -> Option<Severity> {
    match raw.to_ascii_lowercase().as_str() {
        "critical" | "severe" => Some(Severity::Critical),
        "high" | "heavy" => Some(Severity::High),
        "medium" | "moderate" => Some(Severity::Medium),
        "low" | "light" | "normal" => Some(Severity::Low),
        _ => None,
    }
}
