//! Simulated network latency applied before every service call.
//!
//! Callers drive loading states off these pauses, so each operation awaits
//! a delay chosen by its [`Weight`]. Tests inject [`NoLatency`].

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use configs::LatencyConfig;
use rand::Rng;

/// Relative cost of an operation. Defaults: 150/200/250/300/400 ms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    /// Single-record category/ledger lookups.
    Lookup,
    /// Single-record product reads, votes, ledger writes.
    Light,
    Search,
    /// Product listings, updates, deletes.
    Standard,
    /// Product creation.
    Heavy,
}

#[async_trait]
pub trait Latency: Send + Sync {
    async fn pause(&self, weight: Weight);
}

/// Sleeps on the tokio timer for the configured per-weight delay plus jitter.
#[derive(Clone, Debug)]
pub struct SimulatedLatency {
    cfg: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(cfg: LatencyConfig) -> Self { Self { cfg } }

    pub fn delay_for(&self, weight: Weight) -> Duration {
        if !self.cfg.enabled {
            return Duration::ZERO;
        }
        let base = match weight {
            Weight::Lookup => self.cfg.lookup_ms,
            Weight::Light => self.cfg.light_ms,
            Weight::Search => self.cfg.search_ms,
            Weight::Standard => self.cfg.standard_ms,
            Weight::Heavy => self.cfg.heavy_ms,
        };
        let jitter = if self.cfg.jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=self.cfg.jitter_ms)
        };
        Duration::from_millis(base + jitter)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn pause(&self, weight: Weight) {
        let delay = self.delay_for(weight);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn pause(&self, _weight: Weight) {}
}

pub fn from_config(cfg: &LatencyConfig) -> Arc<dyn Latency> {
    if cfg.enabled {
        Arc::new(SimulatedLatency::new(cfg.clone()))
    } else {
        Arc::new(NoLatency)
    }
}
