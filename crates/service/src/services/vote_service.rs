use std::sync::Arc;
use tracing::{info, instrument};

use models::product::ProductId;
use models::vote::{NewVote, Vote};

use crate::clock::Clock;
use crate::errors::ServiceError;
use crate::latency::{Latency, Weight};
use crate::storage::seeded_store::SeededStore;

/// Append-only-ish ledger of vote events.
///
/// Not consulted by `ProductService::vote`; the ledger and a product's
/// `vote_count` are allowed to disagree.
#[derive(Clone)]
pub struct VoteService {
    store: SeededStore<Vec<Vote>>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
}

impl VoteService {
    pub fn new(votes: Vec<Vote>, latency: Arc<dyn Latency>, clock: Arc<dyn Clock>) -> Self {
        Self { store: SeededStore::new(votes), latency, clock }
    }

    pub async fn get_all(&self) -> Vec<Vote> {
        self.latency.pause(Weight::Light).await;
        self.store.snapshot().await
    }

    pub async fn get_by_product_id(&self, product_id: ProductId) -> Vec<Vote> {
        self.latency.pause(Weight::Lookup).await;
        self.store
            .read(|votes| votes.iter().filter(|v| v.product_id == product_id).cloned().collect())
            .await
    }

    /// Append a vote stamped with the current time. The product id is not checked.
    #[instrument(skip(self))]
    pub async fn create(&self, new_vote: NewVote) -> Result<Vote, ServiceError> {
        self.latency.pause(Weight::Light).await;
        let vote = new_vote.into_vote(self.clock.now());
        self.store
            .update(|votes| {
                votes.push(vote.clone());
                Ok(())
            })
            .await?;
        info!(product_id = vote.product_id, "vote_recorded");
        Ok(vote)
    }

    /// Remove the first ledger entry for `product_id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: ProductId) -> Result<Vote, ServiceError> {
        self.latency.pause(Weight::Light).await;
        let removed = self
            .store
            .update(|votes| {
                let idx = votes
                    .iter()
                    .position(|v| v.product_id == product_id)
                    .ok_or_else(|| ServiceError::not_found("vote"))?;
                Ok(votes.remove(idx))
            })
            .await?;
        info!(product_id, "vote_removed");
        Ok(removed)
    }

    pub async fn reset(&self) {
        self.store.reset().await;
    }

    pub async fn snapshot(&self) -> Vec<Vote> {
        self.store.snapshot().await
    }
}
