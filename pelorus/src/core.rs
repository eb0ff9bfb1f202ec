use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use pelorus_core::cache::{TtlCache, maybe_store};
use pelorus_core::connector::FeedConnector;
use pelorus_core::rank::Rankable;
use pelorus_core::{
    CacheConfig, ConnectorKey, DisruptionRecord, EntityKind, FeedError, FeedReport, Origin,
    PortRecord, RetryConfig, ScoreWeights, TariffRecord, VesselRecord,
};

use crate::router::keys::{DisruptionKey, PortKey, TariffKey, VesselKey};

/// Resolved orchestrator configuration.
pub(crate) struct Config {
    pub(crate) retry: RetryConfig,
    pub(crate) score: ScoreWeights,
    pub(crate) provider_timeout: Duration,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) per_kind_priority: HashMap<EntityKind, Vec<ConnectorKey>>,
}

/// One typed cache per entity kind; `None` where the TTL table disables
/// caching for that kind.
pub(crate) struct Stores {
    pub(crate) ports: Option<TtlCache<PortKey, Vec<PortRecord>>>,
    pub(crate) disruptions: Option<TtlCache<DisruptionKey, Vec<DisruptionRecord>>>,
    pub(crate) vessels: Option<TtlCache<VesselKey, Vec<VesselRecord>>>,
    pub(crate) tariffs: Option<TtlCache<TariffKey, Vec<TariffRecord>>>,
}

impl Stores {
    fn from_config(cfg: &CacheConfig) -> Self {
        Self {
            ports: maybe_store(cfg, EntityKind::Port),
            disruptions: maybe_store(cfg, EntityKind::Disruption),
            vessels: maybe_store(cfg, EntityKind::Vessel),
            tariffs: maybe_store(cfg, EntityKind::Tariff),
        }
    }
}

/// Orchestrator that aggregates entity records across registered
/// connectors: cache check, settle-all fan-out, merge, dedupe, rank,
/// truncate, cache write.
pub struct Pelorus {
    pub(crate) connectors: Vec<Arc<dyn FeedConnector>>,
    pub(crate) cfg: Config,
    pub(crate) stores: Stores,
}

impl std::fmt::Debug for Pelorus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pelorus")
            .field("connectors", &self.connectors.len())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Pelorus`] orchestrator with custom
/// configuration.
pub struct PelorusBuilder {
    connectors: Vec<Arc<dyn FeedConnector>>,
    cache: CacheConfig,
    retry: RetryConfig,
    score: ScoreWeights,
    provider_timeout: Duration,
    request_timeout: Option<Duration>,
    per_kind_priority: HashMap<EntityKind, Vec<ConnectorKey>>,
}

impl Default for PelorusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PelorusBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults: the standard TTL table, three attempts with exponential
    ///   backoff, the default score weights, 5s provider timeout, no
    ///   overall request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cache: CacheConfig::default(),
            retry: RetryConfig::default(),
            score: ScoreWeights::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            per_kind_priority: HashMap::new(),
        }
    }

    /// Register a source connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order doubles as merge priority when no explicit
    ///   per-kind preference is set; on dedup collisions the
    ///   higher-priority provider's record wins.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FeedConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for an entity kind using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Influences ordering among eligible providers for the given kind;
    ///   it does not filter out unlisted connectors (they remain after the
    ///   listed ones).
    /// - Unknown keys are dropped during [`build`](Self::build).
    #[must_use]
    pub fn prefer_for_kind(
        mut self,
        kind: EntityKind,
        connectors_desc: &[Arc<dyn FeedConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.per_kind_priority.insert(kind, keys);
        self
    }

    /// Replace the cache TTL/capacity table.
    #[must_use]
    pub fn cache_config(mut self, cfg: CacheConfig) -> Self {
        self.cache = cfg;
        self
    }

    /// Replace the retry/backoff configuration applied to every provider call.
    #[must_use]
    pub const fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = cfg;
        self
    }

    /// Replace the relevance score weight table.
    #[must_use]
    pub const fn score_weights(mut self, weights: ScoreWeights) -> Self {
        self.score = weights;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied around every provider call, inside the retry loop, so a
    /// stalled upstream cannot pin a fan-out open.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for a whole fan-out aggregation.
    ///
    /// When exceeded, the call degrades exactly like a total provider
    /// failure (last known good, then empty).
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the [`Pelorus`] orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Pelorus, FeedError> {
        // Validate priority keys against registered connectors; drop
        // unknowns and dedup.
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();
        for keys in self.per_kind_priority.values_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            keys.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        if self.connectors.is_empty() {
            return Err(FeedError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let stores = Stores::from_config(&self.cache);
        Ok(Pelorus {
            connectors: self.connectors,
            cfg: Config {
                retry: self.retry,
                score: self.score,
                provider_timeout: self.provider_timeout,
                request_timeout: self.request_timeout,
                per_kind_priority: self.per_kind_priority,
            },
            stores,
        })
    }
}

/// Wrap a provider future with a timeout and standardized timeout error
/// mapping.
pub(crate) async fn provider_call_with_timeout<T, Fut>(
    connector_name: &'static str,
    capability: &'static str,
    timeout: Duration,
    fut: Fut,
) -> Result<T, FeedError>
where
    Fut: core::future::Future<Output = Result<T, FeedError>>,
{
    (tokio::time::timeout(timeout, fut).await)
        .unwrap_or_else(|_| Err(FeedError::provider_timeout(connector_name, capability)))
}

/// Bound `fut` by an optional overall deadline.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    capability: &'static str,
    fut: F,
) -> Result<T, FeedError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(deadline) => (tokio::time::timeout(deadline, fut).await)
            .map_err(|_| FeedError::request_timeout(capability)),
        None => Ok(fut.await),
    }
}

/// Tag an opaque provider failure with the connector it came from;
/// already-attributed and aggregate errors pass through unchanged.
pub(crate) fn tag_err(connector: &str, e: FeedError) -> FeedError {
    match e {
        e @ (FeedError::NotFound { .. }
        | FeedError::ProviderTimeout { .. }
        | FeedError::Connector { .. }
        | FeedError::RequestTimeout { .. }
        | FeedError::AllProvidersTimedOut { .. }
        | FeedError::AllProvidersFailed(_)) => e,
        other => FeedError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Pelorus {
    /// Start building a new [`Pelorus`] instance.
    ///
    /// Typical usage chains connector registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let gov = Arc::new(GovTradeConnector::new()?);
    /// let news = Arc::new(NewsWireConnector::new()?);
    ///
    /// let pelorus = pelorus::Pelorus::builder()
    ///     .with_connector(gov.clone())
    ///     .with_connector(news.clone())
    ///     .prefer_for_kind(pelorus::EntityKind::Disruption, &[news, gov])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PelorusBuilder {
        PelorusBuilder::new()
    }

    /// Registered connectors eligible for `kind`, in priority order:
    /// explicit per-kind preference first, then registration order.
    pub(crate) fn ordered_for_kind(&self, kind: EntityKind) -> Vec<Arc<dyn FeedConnector>> {
        let mut out: Vec<(usize, Arc<dyn FeedConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if let Some(pref) = self.cfg.per_kind_priority.get(&kind) {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Settle-all fan-out for one entity kind: every eligible connector is
    /// invoked concurrently, wrapped in the retry policy and the
    /// per-provider timeout; merging happens only after all settle.
    ///
    /// Returns the successful batches in priority order plus the
    /// per-provider failures.
    ///
    /// # Errors
    /// Returns `RequestTimeout` only when the overall deadline expires.
    pub(crate) async fn fan_out<T, F, Fut>(
        &self,
        kind: EntityKind,
        capability: &'static str,
        make_call: F,
    ) -> Result<(Vec<Vec<T>>, Vec<FeedError>), FeedError>
    where
        T: Send,
        F: Fn(Arc<dyn FeedConnector>) -> Option<Fut> + Sync,
        Fut: core::future::Future<Output = Result<Vec<T>, FeedError>> + Send,
    {
        let retry_cfg = self.cfg.retry;
        let timeout = self.cfg.provider_timeout;
        let make_call = &make_call;

        let tasks: Vec<_> = self
            .ordered_for_kind(kind)
            .into_iter()
            .filter_map(|c| {
                if !c.supports_kind(kind) {
                    return None;
                }
                // Probe capability before scheduling; the probe future is
                // dropped unpolled.
                make_call(c.clone())?;
                Some(async move {
                    let name = c.name();
                    let res = pelorus_core::retry(&retry_cfg, || {
                        let c = c.clone();
                        async move {
                            match make_call(c) {
                                Some(fut) => {
                                    provider_call_with_timeout(name, capability, timeout, fut)
                                        .await
                                }
                                None => Err(FeedError::unsupported(capability)),
                            }
                        }
                    })
                    .await;
                    (name, res)
                })
            })
            .collect();

        if tasks.is_empty() {
            return Ok((Vec::new(), vec![FeedError::unsupported(capability)]));
        }

        let joined = with_request_deadline(
            self.cfg.request_timeout,
            capability,
            futures::future::join_all(tasks),
        )
        .await?;

        let mut batches = Vec::new();
        let mut warnings = Vec::new();
        for (name, res) in joined {
            match res {
                Ok(records) => {
                    tracing::debug!(connector = name, capability, count = records.len(), "provider ok");
                    batches.push(records);
                }
                Err(e) => {
                    let e = tag_err(name, e);
                    tracing::debug!(connector = name, capability, error = %e, "provider failed");
                    warnings.push(e);
                }
            }
        }
        Ok((batches, warnings))
    }

    /// The shared aggregation pipeline, one copy for all entity kinds:
    /// cache check, fan-out, merge, dedupe, rank, truncate, cache write,
    /// and the degrade-to-empty contract on total failure.
    pub(crate) async fn aggregate_kind<T, K, F, Fut>(
        &self,
        kind: EntityKind,
        capability: &'static str,
        store: Option<&TtlCache<K, Vec<T>>>,
        key: K,
        limit: Option<usize>,
        make_call: F,
    ) -> FeedReport<T>
    where
        T: Rankable + Clone + Send,
        K: std::hash::Hash + Eq + Clone,
        F: Fn(Arc<dyn FeedConnector>) -> Option<Fut> + Sync,
        Fut: core::future::Future<Output = Result<Vec<T>, FeedError>> + Send,
    {
        if let Some(store) = store {
            if let Some(cached) = store.get(&key).await {
                tracing::debug!(kind = %kind, "serving cached aggregate");
                return FeedReport {
                    records: (*cached).clone(),
                    origin: Origin::Cached,
                    warnings: vec![],
                };
            }
        }

        let (batches, warnings) = match self.fan_out(kind, capability, make_call).await {
            Ok(pair) => pair,
            // Overall deadline expired: degrade exactly like total failure.
            Err(e) => (Vec::new(), vec![e]),
        };

        if batches.is_empty() {
            tracing::warn!(kind = %kind, failures = warnings.len(), "all providers failed; degrading");
            if let Some(store) = store {
                if let Some(stale) = store.last_known_good(&key).await {
                    return FeedReport {
                        records: (*stale).clone(),
                        origin: Origin::LastKnownGood,
                        warnings,
                    };
                }
            }
            return FeedReport {
                records: vec![],
                origin: Origin::Empty,
                warnings,
            };
        }

        let merged: Vec<T> = batches.into_iter().flatten().collect();
        let deduped = pelorus_core::dedup(merged);
        let records = pelorus_core::rank(deduped, &self.cfg.score, limit, Utc::now());

        if let Some(store) = store {
            store.insert(key, records.clone()).await;
        }
        FeedReport {
            records,
            origin: Origin::Fresh,
            warnings,
        }
    }
}
