use async_trait::async_trait;
use mongodb::bson::doc;
use tokio_stream::StreamExt;

use crate::business::{Business, BusinessStore, BusinessStoreError};

pub(crate) const COLLECTION: &str = "businesses";

pub struct MongoDbBusinessStore {
    db: mongodb::Database,
}

impl MongoDbBusinessStore {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Business> {
        self.db.collection(COLLECTION)
    }
}

#[async_trait]
impl BusinessStore for MongoDbBusinessStore {
    async fn next_id(&self) -> Result<i64, BusinessStoreError> {
        Ok(super::next_id(&self.db, COLLECTION).await?)
    }

    async fn count(&self) -> Result<u64, BusinessStoreError> {
        Ok(self.collection().count_documents(doc! {}).await?)
    }

    async fn page(&self, skip: u64, limit: i64) -> Result<Vec<Business>, BusinessStoreError> {
        let mut cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .skip(skip)
            .limit(limit)
            .await?;

        let mut businesses = Vec::new();
        while let Some(business) = cursor.try_next().await? {
            businesses.push(business);
        }

        Ok(businesses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Business>, BusinessStoreError> {
        Ok(self.collection().find_one(doc! { "id": id }).await?)
    }

    async fn find_by_owner(&self, ownerid: i64) -> Result<Vec<Business>, BusinessStoreError> {
        let mut cursor = self.collection().find(doc! { "ownerid": ownerid }).await?;

        let mut businesses = Vec::new();
        while let Some(business) = cursor.try_next().await? {
            businesses.push(business);
        }

        Ok(businesses)
    }

    async fn insert(&self, business: &Business) -> Result<(), BusinessStoreError> {
        self.collection().insert_one(business).await?;
        Ok(())
    }

    async fn replace(&self, id: i64, business: &Business) -> Result<bool, BusinessStoreError> {
        let result = self
            .collection()
            .replace_one(doc! { "id": id }, business)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, BusinessStoreError> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
