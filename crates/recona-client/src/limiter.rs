//! Token-bucket rate limiter gating outbound API calls.
//!
//! One bucket is owned by each client and shared by its clones. Tokens
//! refill continuously at the configured rate up to the burst capacity;
//! every admitted call consumes exactly one token. All bucket state
//! lives behind a single mutex and is only touched inside one lock
//! region per admission check, so concurrent callers never observe a
//! partial refill.

use std::time::Duration;

use recona_core::{ReconaError, Result};
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug)]
struct Bucket {
    /// Refill rate in tokens per second
    rate: f64,
    /// Maximum tokens the bucket can hold
    burst: u32,
    /// Tokens currently available, fractional between refills
    tokens: f64,
    /// When the bucket was last refilled
    refilled_at: Instant,
}

impl Bucket {
    /// Credit tokens for the time elapsed since the last refill,
    /// clamped to the burst capacity.
    fn refill(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.refilled_at).as_secs_f64();
        self.tokens = f64::from(self.burst).min(self.tokens + elapsed * self.rate);
        self.refilled_at = now;
    }
}

/// Token-bucket admission gate.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Create a limiter refilling at `rate` tokens per second with the
    /// given burst capacity. The bucket starts full, so up to `burst`
    /// calls are admitted immediately.
    pub(crate) fn new(rate: f64, burst: u32) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                rate,
                burst,
                tokens: f64::from(burst),
                refilled_at: Instant::now(),
            }),
        }
    }

    /// Take one token, waiting as long as necessary for a refill.
    ///
    /// Cancel-safe: a token is only consumed synchronously inside the
    /// lock region, so dropping this future mid-wait releases nothing
    /// and leaves the bucket untouched.
    pub(crate) async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.bucket.lock().await;
                bucket.refill(Instant::now());
                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    return;
                }
                Duration::from_secs_f64((1.0 - bucket.tokens) / bucket.rate)
            };
            tokio::time::sleep(wait).await;
        }
    }

    /// Take one token if available without waiting.
    #[cfg(test)]
    async fn try_acquire(&self) -> bool {
        let mut bucket = self.bucket.lock().await;
        bucket.refill(Instant::now());
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Replace the refill rate and burst capacity.
    ///
    /// Takes effect immediately for subsequent admissions; callers
    /// already waiting re-check the bucket when their sleep elapses.
    /// Non-positive values are rejected and leave the previous
    /// configuration intact.
    pub(crate) async fn reconfigure(&self, rate: f64, burst: u32) -> Result<()> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(ReconaError::Config(format!(
                "requests per second must be positive, got: {rate}"
            )));
        }
        if burst == 0 {
            return Err(ReconaError::Config(
                "burst size must be positive, got: 0".to_string(),
            ));
        }

        let mut bucket = self.bucket.lock().await;
        // Settle accrued credit at the old rate before switching.
        bucket.refill(Instant::now());
        bucket.rate = rate;
        bucket.burst = burst;
        bucket.tokens = bucket.tokens.min(f64::from(burst));
        Ok(())
    }

    /// Current (rate, burst) configuration.
    pub(crate) async fn config(&self) -> (f64, u32) {
        let bucket = self.bucket.lock().await;
        (bucket.rate, bucket.burst)
    }

    #[cfg(test)]
    async fn available(&self) -> f64 {
        let mut bucket = self.bucket.lock().await;
        bucket.refill(Instant::now());
        bucket.tokens
    }
}
