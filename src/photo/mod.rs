use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, Schema};

pub mod in_memory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: i64,
    pub userid: i64,
    pub businessid: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

pub const PHOTO_SCHEMA: Schema = &[
    ("userid", FieldSpec::REQUIRED),
    ("businessid", FieldSpec::REQUIRED),
    ("caption", FieldSpec::OPTIONAL),
];

#[derive(thiserror::Error, Debug)]
pub enum PhotoStoreError {
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),
    #[error("{0}")]
    Other(String),
}

pub type DynPhotoStore = Arc<dyn PhotoStore + Send + Sync>;

#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn next_id(&self) -> Result<i64, PhotoStoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, PhotoStoreError>;
    async fn find_by_user(&self, userid: i64) -> Result<Vec<Photo>, PhotoStoreError>;
    async fn find_by_business(&self, businessid: i64) -> Result<Vec<Photo>, PhotoStoreError>;
    async fn insert(&self, photo: &Photo) -> Result<(), PhotoStoreError>;
    /// Updates the photo only if its stored businessid and userid match the
    /// replacement's; reports whether a document matched.
    async fn update_matching(&self, id: i64, photo: &Photo) -> Result<bool, PhotoStoreError>;
    async fn delete(&self, id: i64) -> Result<bool, PhotoStoreError>;
}
