use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Photo, PhotoStore, PhotoStoreError};

pub struct InMemoryPhotoStore {
    photos: Mutex<Vec<Photo>>,
    sequence: AtomicI64,
}

impl InMemoryPhotoStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(photos: Vec<Photo>) -> Self {
        let max_id = photos.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            photos: Mutex::new(photos),
            sequence: AtomicI64::new(max_id),
        }
    }
}

impl Default for InMemoryPhotoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoStore for InMemoryPhotoStore {
    async fn next_id(&self) -> Result<i64, PhotoStoreError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, PhotoStoreError> {
        let lock = self.photos.lock().await;
        Ok(lock.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_user(&self, userid: i64) -> Result<Vec<Photo>, PhotoStoreError> {
        let lock = self.photos.lock().await;
        Ok(lock.iter().filter(|p| p.userid == userid).cloned().collect())
    }

    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Photo>, PhotoStoreError> {
        let lock = self.photos.lock().await;
        Ok(lock
            .iter()
            .filter(|p| p.businessid == businessid)
            .cloned()
            .collect())
    }

    async fn insert(&self, photo: &Photo) -> Result<(), PhotoStoreError> {
        self.photos.lock().await.push(photo.clone());
        Ok(())
    }

    async fn update_matching(&self, id: i64, photo: &Photo) -> Result<bool, PhotoStoreError> {
        let mut lock = self.photos.lock().await;
        match lock.iter().position(|p| {
            p.id == id && p.userid == photo.userid && p.businessid == photo.businessid
        }) {
            Some(pos) => {
                let mut updated = photo.clone();
                // absent optional fields are left untouched, like a $set
                if updated.caption.is_none() {
                    updated.caption = lock[pos].caption.clone();
                }
                lock[pos] = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, PhotoStoreError> {
        let mut lock = self.photos.lock().await;
        let before = lock.len();
        lock.retain(|p| p.id != id);
        Ok(lock.len() < before)
    }
}
