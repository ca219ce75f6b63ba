use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory state with a pristine seed copy.
///
/// Holds `T` behind a `RwLock` and keeps the original seed so the state can be
/// restored with [`SeededStore::reset`]. Nothing is written anywhere.
#[derive(Clone)]
pub struct SeededStore<T> {
    seed: Arc<T>,
    inner: Arc<RwLock<T>>,
}

impl<T> SeededStore<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(seed: T) -> Self {
        let inner = Arc::new(RwLock::new(seed.clone()));
        Self { seed: Arc::new(seed), inner }
    }

    /// Run a read-only projection under the read lock.
    pub async fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.inner.read().await;
        f(&state)
    }

    /// Apply a mutation under the write lock. An error leaves whatever the
    /// closure did before failing; closures must check before they mutate.
    pub async fn update<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut T) -> Result<R, ServiceError>,
    {
        let mut state = self.inner.write().await;
        f(&mut state)
    }

    /// Owned copy of the whole state.
    pub async fn snapshot(&self) -> T {
        self.inner.read().await.clone()
    }

    /// Restore the seed.
    pub async fn reset(&self) {
        let mut state = self.inner.write().await;
        *state = (*self.seed).clone();
    }
}
