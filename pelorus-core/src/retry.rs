use std::time::Duration;

use rand::Rng;

use pelorus_types::{FeedError, RetryConfig};

/// Run `op` up to `cfg.max_attempts` times, sleeping between attempts.
///
/// Only failures classified transient by [`FeedError::is_transient`] are
/// retried; deterministic failures (malformed payloads, invalid
/// arguments, unsupported capabilities) are returned immediately, since
/// retrying cannot fix them within the same call. The last transient
/// error is returned once the attempt budget is exhausted.
///
/// # Errors
/// Returns the first non-transient error, or the last transient error
/// after `max_attempts` failures.
pub async fn retry<T, F, Fut>(cfg: &RetryConfig, mut op: F) -> Result<T, FeedError>
where
    F: FnMut() -> Fut,
    Fut: core::future::Future<Output = Result<T, FeedError>>,
{
    let attempts = cfg.max_attempts.max(1);
    let mut last_err: Option<FeedError> = None;
    for attempt in 0..attempts {
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) => {
                tracing::debug!(attempt, error = %e, "transient failure, will retry");
                last_err = Some(e);
                if attempt + 1 < attempts {
                    tokio::time::sleep(delay_for(cfg, attempt)).await;
                }
            }
        }
    }
    Err(last_err.unwrap_or_else(|| FeedError::Other("retry loop produced no error".into())))
}

/// Backoff delay before the retry following failed attempt `attempt`
/// (zero-based): `base * 2^attempt` when exponential, capped at
/// `max_delay_ms`, plus jitter.
fn delay_for(cfg: &RetryConfig, attempt: u32) -> Duration {
    let base = if cfg.exponential {
        cfg.base_delay_ms.saturating_mul(1u64 << attempt.min(16))
    } else {
        cfg.base_delay_ms
    };
    Duration::from_millis(jitter(base.min(cfg.max_delay_ms), cfg.jitter_percent))
}

fn jitter(base_ms: u64, jitter_percent: u8) -> u64 {
    let jitter_percent = u64::from(jitter_percent.min(100));
    if jitter_percent == 0 || base_ms == 0 {
        return base_ms;
    }
    let jitter_range = std::cmp::max(1, base_ms.saturating_mul(jitter_percent) / 100);
    let mut rng = rand::rng();
    base_ms + rng.random_range(0..jitter_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_doubles_until_capped() {
        let cfg = RetryConfig {
            max_attempts: 5,
            base_delay_ms: 100,
            max_delay_ms: 350,
            exponential: true,
            jitter_percent: 0,
        };
        assert_eq!(delay_for(&cfg, 0), Duration::from_millis(100));
        assert_eq!(delay_for(&cfg, 1), Duration::from_millis(200));
        assert_eq!(delay_for(&cfg, 2), Duration::from_millis(350));
        assert_eq!(delay_for(&cfg, 3), Duration::from_millis(350));
    }

    #[test]
    fn fixed_mode_keeps_base_delay() {
        let cfg = RetryConfig {
            exponential: false,
            jitter_percent: 0,
            ..RetryConfig::default()
        };
        assert_eq!(delay_for(&cfg, 0), delay_for(&cfg, 3));
    }

    #[test]
    fn jitter_stays_within_budget() {
        for _ in 0..100 {
            let d = jitter(1_000, 20);
            assert!((1_000..1_200).contains(&d));
        }
    }
}
