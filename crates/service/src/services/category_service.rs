use std::sync::Arc;
use tracing::debug;

use models::category::{Category, CategoryId};

use crate::errors::ServiceError;
use crate::latency::{Latency, Weight};
use crate::storage::seeded_store::SeededStore;

/// Read-only category lookups. Results are owned copies in seed order.
#[derive(Clone)]
pub struct CategoryService {
    store: SeededStore<Vec<Category>>,
    latency: Arc<dyn Latency>,
}

impl CategoryService {
    pub fn new(categories: Vec<Category>, latency: Arc<dyn Latency>) -> Self {
        Self { store: SeededStore::new(categories), latency }
    }

    pub async fn get_all(&self) -> Vec<Category> {
        self.latency.pause(Weight::Light).await;
        self.store.snapshot().await
    }

    pub async fn get_by_id(&self, id: CategoryId) -> Result<Category, ServiceError> {
        self.latency.pause(Weight::Lookup).await;
        self.store
            .read(|cats| cats.iter().find(|c| c.id == id).cloned())
            .await
            .ok_or_else(|| {
                debug!(category_id = id, "category lookup missed");
                ServiceError::not_found("category")
            })
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, ServiceError> {
        self.latency.pause(Weight::Lookup).await;
        self.store
            .read(|cats| cats.iter().find(|c| c.slug == slug).cloned())
            .await
            .ok_or_else(|| {
                debug!(%slug, "category lookup missed");
                ServiceError::not_found("category")
            })
    }
}
