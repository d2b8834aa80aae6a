use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Business, BusinessStore, BusinessStoreError};

/// Vec-backed store, used by the handler and integration tests.
pub struct InMemoryBusinessStore {
    businesses: Mutex<Vec<Business>>,
    sequence: AtomicI64,
}

impl InMemoryBusinessStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(businesses: Vec<Business>) -> Self {
        let max_id = businesses.iter().map(|b| b.id).max().unwrap_or(0);
        Self {
            businesses: Mutex::new(businesses),
            sequence: AtomicI64::new(max_id),
        }
    }
}

impl Default for InMemoryBusinessStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusinessStore for InMemoryBusinessStore {
    async fn next_id(&self) -> Result<i64, BusinessStoreError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn count(&self) -> Result<u64, BusinessStoreError> {
        Ok(self.businesses.lock().await.len() as u64)
    }

    async fn page(&self, skip: u64, limit: i64) -> Result<Vec<Business>, BusinessStoreError> {
        let mut all = self.businesses.lock().await.clone();
        all.sort_by_key(|b| b.id);
        Ok(all
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>, BusinessStoreError> {
        let lock = self.businesses.lock().await;
        Ok(lock.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_owner(&self, ownerid: i64) -> Result<Vec<Business>, BusinessStoreError> {
        let lock = self.businesses.lock().await;
        Ok(lock.iter().filter(|b| b.ownerid == ownerid).cloned().collect())
    }

    async fn insert(&self, business: &Business) -> Result<(), BusinessStoreError> {
        self.businesses.lock().await.push(business.clone());
        Ok(())
    }

    async fn replace(&self, id: i64, business: &Business) -> Result<bool, BusinessStoreError> {
        let mut lock = self.businesses.lock().await;
        match lock.iter().position(|b| b.id == id) {
            Some(pos) => {
                lock[pos] = business.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, BusinessStoreError> {
        let mut lock = self.businesses.lock().await;
        let before = lock.len();
        lock.retain(|b| b.id != id);
        Ok(lock.len() < before)
    }
}
