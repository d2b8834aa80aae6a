use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use tokio_stream::StreamExt;

use crate::review::{Review, ReviewStore, ReviewStoreError};

pub(crate) const COLLECTION: &str = "reviews";

const DUPLICATE_KEY: i32 = 11000;

pub struct MongoDbReviewStore {
    db: mongodb::Database,
}

impl MongoDbReviewStore {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Review> {
        self.db.collection(COLLECTION)
    }

    async fn find_all(
        &self,
        filter: mongodb::bson::Document,
    ) -> Result<Vec<Review>, ReviewStoreError> {
        let mut cursor = self.collection().find(filter).await?;

        let mut reviews = Vec::new();
        while let Some(review) = cursor.try_next().await? {
            reviews.push(review);
        }

        Ok(reviews)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err))
            if write_err.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl ReviewStore for MongoDbReviewStore {
    async fn next_id(&self) -> Result<i64, ReviewStoreError> {
        Ok(super::next_id(&self.db, COLLECTION).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewStoreError> {
        Ok(self.collection().find_one(doc! { "id": id }).await?)
    }

    async fn find_by_user(&self, userid: i64) -> Result<Vec<Review>, ReviewStoreError> {
        self.find_all(doc! { "userid": userid }).await
    }

    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Review>, ReviewStoreError> {
        self.find_all(doc! { "businessid": businessid }).await
    }

    async fn insert(&self, review: &Review) -> Result<(), ReviewStoreError> {
        match self.collection().insert_one(review).await {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => Err(ReviewStoreError::Duplicate {
                userid: review.userid,
                businessid: review.businessid,
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_matching(&self, id: i64, review: &Review) -> Result<bool, ReviewStoreError> {
        let filter = doc! {
            "id": id,
            "userid": review.userid,
            "businessid": review.businessid,
        };
        let update = doc! {
            "$set": mongodb::bson::to_bson(review)
                .map_err(|e| ReviewStoreError::Other(e.to_string()))?
        };

        let result = self.collection().update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, ReviewStoreError> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
