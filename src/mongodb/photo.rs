use async_trait::async_trait;
use mongodb::bson::doc;
use tokio_stream::StreamExt;

use crate::photo::{Photo, PhotoStore, PhotoStoreError};

pub(crate) const COLLECTION: &str = "photos";

pub struct MongoDbPhotoStore {
    db: mongodb::Database,
}

impl MongoDbPhotoStore {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Photo> {
        self.db.collection(COLLECTION)
    }

    async fn find_all(
        &self,
        filter: mongodb::bson::Document,
    ) -> Result<Vec<Photo>, PhotoStoreError> {
        let mut cursor = self.collection().find(filter).await?;

        let mut photos = Vec::new();
        while let Some(photo) = cursor.try_next().await? {
            photos.push(photo);
        }

        Ok(photos)
    }
}

#[async_trait]
impl PhotoStore for MongoDbPhotoStore {
    async fn next_id(&self) -> Result<i64, PhotoStoreError> {
        Ok(super::next_id(&self.db, COLLECTION).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, PhotoStoreError> {
        Ok(self.collection().find_one(doc! { "id": id }).await?)
    }

    async fn find_by_user(&self, userid: i64) -> Result<Vec<Photo>, PhotoStoreError> {
        self.find_all(doc! { "userid": userid }).await
    }

    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Photo>, PhotoStoreError> {
        self.find_all(doc! { "businessid": businessid }).await
    }

    async fn insert(&self, photo: &Photo) -> Result<(), PhotoStoreError> {
        self.collection().insert_one(photo).await?;
        Ok(())
    }

    async fn update_matching(&self, id: i64, photo: &Photo) -> Result<bool, PhotoStoreError> {
        let filter = doc! {
            "id": id,
            "userid": photo.userid,
            "businessid": photo.businessid,
        };
        let update = doc! {
            "$set": mongodb::bson::to_bson(photo)
                .map_err(|e| PhotoStoreError::Other(e.to_string()))?
        };

        let result = self.collection().update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, PhotoStoreError> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
