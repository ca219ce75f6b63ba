//! Process-wide service context.
//!
//! Built once at startup and handed to callers by reference; there is no
//! global instance. `reset` returns every service to its seed.

use std::sync::Arc;
use tracing::info;

use configs::AppConfig;
use models::seed::Seed;

use crate::clock::{Clock, SystemClock};
use crate::errors::ServiceError;
use crate::latency::{self, Latency};
use crate::services::{CategoryService, ProductService, VoteService};
use crate::storage::seed_loader::load_seed_dir;

#[derive(Clone)]
pub struct ServiceContext {
    pub categories: CategoryService,
    pub products: ProductService,
    pub votes: VoteService,
}

impl ServiceContext {
    pub fn new(seed: Seed, latency: Arc<dyn Latency>, clock: Arc<dyn Clock>) -> Self {
        let Seed { categories, products, votes } = seed;
        Self {
            categories: CategoryService::new(categories, latency.clone()),
            products: ProductService::new(products, latency.clone(), clock.clone()),
            votes: VoteService::new(votes, latency, clock),
        }
    }

    /// Context over the compiled-in dataset.
    pub fn builtin(latency: Arc<dyn Latency>, clock: Arc<dyn Clock>) -> Result<Self, ServiceError> {
        Ok(Self::new(Seed::builtin()?, latency, clock))
    }

    /// Seed from `cfg.seed.dir` when set, latency from `cfg.latency`, system clock.
    pub async fn from_config(cfg: &AppConfig) -> Result<Self, ServiceError> {
        let seed = match cfg.seed.dir.as_deref() {
            Some(dir) => load_seed_dir(dir).await?,
            None => Seed::builtin()?,
        };
        info!(
            products = seed.products.len(),
            categories = seed.categories.len(),
            votes = seed.votes.len(),
            latency_enabled = cfg.latency.enabled,
            "service_context_ready"
        );
        Ok(Self::new(seed, latency::from_config(&cfg.latency), Arc::new(SystemClock)))
    }

    pub async fn reset(&self) {
        self.products.reset().await;
        self.votes.reset().await;
        info!("service_context_reset");
    }

    /// Current state of every store, in insertion order.
    pub async fn snapshot(&self) -> Seed {
        Seed {
            categories: self.categories.get_all().await,
            products: self.products.snapshot().await,
            votes: self.votes.snapshot().await,
        }
    }
}
