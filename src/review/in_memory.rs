use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Review, ReviewStore, ReviewStoreError};

/// Vec-backed store mirroring the MongoDB semantics, including the
/// one-review-per-user-per-business constraint.
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
    sequence: AtomicI64,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(reviews: Vec<Review>) -> Self {
        let max_id = reviews.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            reviews: Mutex::new(reviews),
            sequence: AtomicI64::new(max_id),
        }
    }
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn next_id(&self) -> Result<i64, ReviewStoreError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewStoreError> {
        let lock = self.reviews.lock().await;
        Ok(lock.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_user(&self, userid: i64) -> Result<Vec<Review>, ReviewStoreError> {
        let lock = self.reviews.lock().await;
        Ok(lock.iter().filter(|r| r.userid == userid).cloned().collect())
    }

    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Review>, ReviewStoreError> {
        let lock = self.reviews.lock().await;
        Ok(lock
            .iter()
            .filter(|r| r.businessid == businessid)
            .cloned()
            .collect())
    }

    async fn insert(&self, review: &Review) -> Result<(), ReviewStoreError> {
        let mut lock = self.reviews.lock().await;
        if lock
            .iter()
            .any(|r| r.userid == review.userid && r.businessid == review.businessid)
        {
            return Err(ReviewStoreError::Duplicate {
                userid: review.userid,
                businessid: review.businessid,
            });
        }
        lock.push(review.clone());
        Ok(())
    }

    async fn update_matching(&self, id: i64, review: &Review) -> Result<bool, ReviewStoreError> {
        let mut lock = self.reviews.lock().await;
        match lock.iter().position(|r| {
            r.id == id && r.userid == review.userid && r.businessid == review.businessid
        }) {
            Some(pos) => {
                let mut updated = review.clone();
                // absent optional fields are left untouched, like a $set
                if updated.review.is_none() {
                    updated.review = lock[pos].review.clone();
                }
                lock[pos] = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, ReviewStoreError> {
        let mut lock = self.reviews.lock().await;
        let before = lock.len();
        lock.retain(|r| r.id != id);
        Ok(lock.len() < before)
    }
}
