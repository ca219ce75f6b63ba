use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use models::feed::FeedFilter;
use models::product::{next_product_id, sort_by_votes, NewProduct, Product, ProductId, ProductPatch};
use models::timeframe::Timeframe;

use crate::clock::Clock;
use crate::errors::ServiceError;
use crate::latency::{Latency, Weight};
use crate::storage::seeded_store::SeededStore;

/// Product rows plus the id counter derived from them.
/// `next_id` is `None` once the id space is exhausted.
#[derive(Clone, Debug)]
pub struct ProductTable {
    rows: Vec<Product>,
    next_id: Option<ProductId>,
}

impl ProductTable {
    pub fn new(rows: Vec<Product>) -> Self {
        let next_id = next_product_id(&rows);
        Self { rows, next_id }
    }

    fn position(&self, id: ProductId) -> Result<usize, ServiceError> {
        self.rows
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("product"))
    }
}

/// Owns the product collection for the process lifetime.
///
/// Every result is a clone; listings are sorted by vote count, highest first,
/// with ties in insertion order.
#[derive(Clone)]
pub struct ProductService {
    store: SeededStore<ProductTable>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
}

impl ProductService {
    pub fn new(products: Vec<Product>, latency: Arc<dyn Latency>, clock: Arc<dyn Clock>) -> Self {
        Self { store: SeededStore::new(ProductTable::new(products)), latency, clock }
    }

    async fn listing<F>(&self, weight: Weight, keep: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.latency.pause(weight).await;
        let mut rows: Vec<Product> = self
            .store
            .read(|t| t.rows.iter().filter(|p| keep(p)).cloned().collect())
            .await;
        sort_by_votes(&mut rows);
        rows
    }

    pub async fn get_all(&self) -> Vec<Product> {
        self.listing(Weight::Standard, |_| true).await
    }

    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.latency.pause(Weight::Light).await;
        self.store
            .read(|t| t.rows.iter().find(|p| p.id == id).cloned())
            .await
            .ok_or_else(|| {
                debug!(product_id = id, "product lookup missed");
                ServiceError::not_found("product")
            })
    }

    /// Compares `category_slug` with the product's category *name*, ignoring
    /// case. Slugs of multi-word categories therefore match nothing.
    pub async fn get_by_category(&self, category_slug: &str) -> Vec<Product> {
        self.listing(Weight::Standard, |p| p.in_category(category_slug)).await
    }

    /// Products launched on `date` (UTC calendar day).
    pub async fn get_by_date(&self, date: NaiveDate) -> Vec<Product> {
        self.listing(Weight::Standard, |p| p.launched_on(date)).await
    }

    pub async fn get_top_products(&self, timeframe: Timeframe) -> Vec<Product> {
        let cutoff = timeframe.cutoff(self.clock.now());
        debug!(timeframe = timeframe.as_str(), %cutoff, "top products window");
        self.listing(Weight::Standard, |p| p.launch_date >= cutoff).await
    }

    /// Case-insensitive substring match on title, tagline, description or maker.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.listing(Weight::Search, |p| p.matches_query(&needle)).await
    }

    /// Listing behind a feed view. A category filter takes precedence.
    pub async fn feed(&self, filter: &FeedFilter) -> Vec<Product> {
        match filter {
            FeedFilter::Category(slug) => self.get_by_category(slug).await,
            FeedFilter::Today => self.get_by_date(self.clock.today()).await,
            FeedFilter::Top => self.get_top_products(Timeframe::Week).await,
            FeedFilter::All => self.get_all().await,
        }
    }

    /// Append a product. The creator's implicit vote gives `(1, true)`.
    /// No field validation happens here; see [`ProductService::submit`].
    #[instrument(skip(self, new_product), fields(title = %new_product.title))]
    pub async fn create(&self, new_product: NewProduct) -> Result<Product, ServiceError> {
        self.latency.pause(Weight::Heavy).await;
        let now = self.clock.now();
        let created = self
            .store
            .update(|t| {
                let id = t
                    .next_id
                    .ok_or_else(|| ServiceError::Storage("product id space exhausted".into()))?;
                let product = new_product.into_product(id, now);
                t.next_id = id.checked_add(1);
                t.rows.push(product.clone());
                Ok(product)
            })
            .await?;
        info!(product_id = created.id, category = %created.category, "product_created");
        Ok(created)
    }

    /// Validate and normalize a submission, then [`create`](ProductService::create) it.
    pub async fn submit(&self, new_product: NewProduct) -> Result<Product, ServiceError> {
        new_product.validate().map_err(ServiceError::from_validation)?;
        self.create(new_product.normalize()).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, ServiceError> {
        self.latency.pause(Weight::Standard).await;
        let now = self.clock.now();
        let updated = self
            .store
            .update(|t| {
                let idx = t.position(id)?;
                let row = &mut t.rows[idx];
                row.apply_patch(patch, now);
                Ok(row.clone())
            })
            .await?;
        info!(product_id = id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.latency.pause(Weight::Standard).await;
        let removed = self
            .store
            .update(|t| {
                let idx = t.position(id)?;
                Ok(t.rows.remove(idx))
            })
            .await?;
        info!(product_id = id, "product_deleted");
        Ok(removed)
    }

    /// Toggle the viewer's vote. Does not touch the vote ledger.
    #[instrument(skip(self))]
    pub async fn vote(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.latency.pause(Weight::Light).await;
        let voted = self
            .store
            .update(|t| {
                let idx = t.position(id)?;
                let row = &mut t.rows[idx];
                row.toggle_vote();
                Ok(row.clone())
            })
            .await?;
        info!(product_id = id, vote_count = voted.vote_count, has_voted = voted.has_voted, "product_vote_toggled");
        Ok(voted)
    }

    pub async fn reset(&self) {
        self.store.reset().await;
    }

    pub async fn snapshot(&self) -> Vec<Product> {
        self.store.read(|t| t.rows.clone()).await
    }
}
